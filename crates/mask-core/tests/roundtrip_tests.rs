use mask_core::{decode, encode, from_json, to_json, MaskNode, MaskValue};

/// Assert that a canonical mask string survives decode → encode byte for byte.
fn assert_canonical_roundtrip(input: &str) {
    let mask = decode(input).expect("decode failed");
    let encoded = encode(&mask);
    assert_eq!(
        encoded, input,
        "canonical roundtrip failed:\n  input:   {input}\n  tree:    {mask:?}\n  encoded: {encoded}"
    );
}

/// Assert the weaker idempotence that holds for every accepted input:
/// decode(encode(decode(s))) == decode(s).
fn assert_decode_idempotent(input: &str) {
    let first = decode(input).expect("decode failed");
    let second = decode(&encode(&first)).expect("re-decode failed");
    assert_eq!(
        first, second,
        "decode/encode/decode drifted for input {input:?}"
    );
}

// ============================================================================
// Canonical Strings
// ============================================================================

#[test]
fn roundtrip_empty() {
    assert_canonical_roundtrip("");
}

#[test]
fn roundtrip_single_field() {
    assert_canonical_roundtrip("id");
}

#[test]
fn roundtrip_polarity_pair() {
    assert_canonical_roundtrip("id,-secret");
}

#[test]
fn roundtrip_range_group() {
    assert_canonical_roundtrip("items:(start:5,count:15)");
}

#[test]
fn roundtrip_three_levels() {
    assert_canonical_roundtrip("a:(b,c:(d))");
}

#[test]
fn roundtrip_full_projection_example() {
    assert_canonical_roundtrip("id,name,-secret,friends:(start:0,count:10,name)");
}

#[test]
fn roundtrip_empty_group() {
    assert_canonical_roundtrip("a:()");
}

#[test]
fn roundtrip_root_level_range() {
    assert_canonical_roundtrip("start:5");
}

#[test]
fn roundtrip_adjacent_groups() {
    assert_canonical_roundtrip("a:(x),b:(y),-c");
}

// ============================================================================
// Trees
// ============================================================================

#[test]
fn roundtrip_hand_built_tree() {
    let mut friends = MaskNode::new();
    friends.insert("start", MaskValue::Range(0));
    friends.insert("count", MaskValue::Range(10));
    friends.insert("name", MaskValue::Positive);
    let mut mask = MaskNode::new();
    mask.insert("id", MaskValue::Positive);
    mask.insert("secret", MaskValue::Negative);
    mask.insert("friends", MaskValue::Nested(friends));

    assert_eq!(decode(&encode(&mask)).unwrap(), mask);
}

#[test]
fn roundtrip_tree_with_empty_nested_node() {
    let mut mask = MaskNode::new();
    mask.insert("meta", MaskValue::Nested(MaskNode::new()));
    assert_eq!(decode(&encode(&mask)).unwrap(), mask);
}

// ============================================================================
// Non-Canonical Inputs (idempotence only)
// ============================================================================

#[test]
fn idempotent_after_whitespace_trimming() {
    assert_decode_idempotent(" id , name ");
}

#[test]
fn idempotent_after_stray_separators() {
    assert_decode_idempotent(",a,,b,");
}

#[test]
fn idempotent_after_trailing_comma_in_group() {
    assert_decode_idempotent("a:(b,)");
}

#[test]
fn idempotent_for_unseparated_trailing_field() {
    // A field directly after a closed group, with no comma between.
    assert_decode_idempotent("a:(b)c");
}

// ============================================================================
// JSON Representation
// ============================================================================

#[test]
fn roundtrip_through_json_representation() {
    let mask = decode("id,name,-secret,friends:(start:0,count:10,name)").unwrap();
    let restored = from_json(&to_json(&mask)).unwrap();
    assert_eq!(restored, mask);
    assert_eq!(
        encode(&restored),
        "id,name,-secret,friends:(start:0,count:10,name)"
    );
}

#[test]
fn json_representation_uses_integer_coding() {
    let mask = decode("id,-secret,items:(start:3)").unwrap();
    let value = to_json(&mask);
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"id":1,"secret":0,"items":{"start":3}}"#
    );
}
