//! Mask serializer — converts a mask tree into the compact URI form.
//!
//! The output is the single-line textual form embedded (after percent
//! encoding, which is the caller's job) in a request's query parameters:
//!
//! - Inclusion: bare field name (`name`)
//! - Exclusion: `-` prefix (`-name`)
//! - Nested restriction: `field:(sub1,sub2)`
//! - Pagination range: `start:10` / `count:20`, only under those keys
//!
//! Entries are emitted in insertion order, comma separated; nested nodes are
//! wrapped in `:( … )`. An empty root serializes to the empty string, an
//! empty nested node to `:()`.

use crate::types::{is_range_key, MaskNode, MaskValue};

/// Encode a mask tree into its compact textual form.
///
/// Never fails: any tree built from the public constructors serializes.
/// Binding a [`MaskValue::Range`] to a key other than `start`/`count` is a
/// precondition violation and trips a debug assertion.
///
/// # Example
/// ```
/// use mask_core::{encode, MaskNode, MaskValue};
///
/// let mut mask = MaskNode::new();
/// mask.insert("id", MaskValue::Positive);
/// mask.insert("secret", MaskValue::Negative);
/// assert_eq!(encode(&mask), "id,-secret");
/// ```
pub fn encode(root: &MaskNode) -> String {
    let mut out = String::new();
    encode_node(root, false, &mut out);
    out
}

/// Depth-first walk. `parenthesize` is false only for the root; every deeper
/// node is wrapped in `:( … )`.
fn encode_node(node: &MaskNode, parenthesize: bool, out: &mut String) {
    if parenthesize {
        out.push_str(":(");
    }
    let mut delimit = false;
    for (name, value) in node.iter() {
        if delimit {
            out.push(',');
        }
        delimit = true;

        match value {
            MaskValue::Range(n) => {
                debug_assert!(
                    is_range_key(name),
                    "range value bound to non-reserved key '{name}'"
                );
                out.push_str(name);
                out.push(':');
                out.push_str(&n.to_string());
            }
            MaskValue::Positive => {
                out.push_str(name);
            }
            MaskValue::Negative => {
                out.push('-');
                out.push_str(name);
            }
            MaskValue::Nested(child) => {
                out.push_str(name);
                encode_node(child, true, out);
            }
        }
    }
    if parenthesize {
        out.push(')');
    }
}
