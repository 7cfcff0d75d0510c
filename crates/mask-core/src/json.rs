//! JSON representation of a mask tree.
//!
//! Alongside the compact URI form, a mask has a second wire-adjacent shape:
//! a JSON object whose leaf values are the integers `1` (field included) and
//! `0` (field excluded), whose pagination bounds are plain non-negative
//! integers under `start`/`count`, and whose sub-masks are nested objects:
//!
//! ```json
//! {"id": 1, "secret": 0, "friends": {"start": 0, "count": 10, "name": 1}}
//! ```
//!
//! Conversion relies on `serde_json`'s `preserve_order` feature so that
//! object iteration order matches insertion order in both directions.

use crate::error::{MaskError, Result};
use crate::types::{is_range_key, MaskNode, MaskValue};
use serde_json::{Map, Value};

/// Convert a mask tree into its JSON representation.
///
/// # Example
/// ```
/// use mask_core::{to_json, MaskNode, MaskValue};
/// use serde_json::json;
///
/// let mut mask = MaskNode::new();
/// mask.insert("id", MaskValue::Positive);
/// mask.insert("secret", MaskValue::Negative);
/// assert_eq!(to_json(&mask), json!({"id": 1, "secret": 0}));
/// ```
pub fn to_json(node: &MaskNode) -> Value {
    let mut map = Map::new();
    for (name, value) in node.iter() {
        let json_value = match value {
            MaskValue::Positive => Value::from(1u32),
            MaskValue::Negative => Value::from(0u32),
            MaskValue::Range(n) => Value::from(*n),
            MaskValue::Nested(child) => to_json(child),
        };
        map.insert(name.to_string(), json_value);
    }
    Value::Object(map)
}

/// Convert the JSON representation back into a mask tree.
///
/// Numbers under the reserved keys `start`/`count` become range bounds; `1`
/// and `0` elsewhere become positive/negative polarity; objects recurse.
/// Anything else (floats, out-of-range integers, strings, booleans, arrays,
/// null) is rejected with [`MaskError::Representation`].
pub fn from_json(value: &Value) -> Result<MaskNode> {
    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(MaskError::Representation(format!(
                "expected an object at the mask root, got {other}"
            )))
        }
    };
    node_from_map(map)
}

fn node_from_map(map: &Map<String, Value>) -> Result<MaskNode> {
    let mut node = MaskNode::new();
    for (name, value) in map {
        let mask_value = match value {
            Value::Object(child) => MaskValue::Nested(node_from_map(child)?),
            Value::Number(n) => number_value(name, n)?,
            other => {
                return Err(MaskError::Representation(format!(
                    "unsupported value {other} under field '{name}'"
                )))
            }
        };
        node.insert(name.clone(), mask_value);
    }
    Ok(node)
}

/// Interpret an integer leaf: a range bound under `start`/`count`, polarity
/// (1/0) everywhere else.
fn number_value(name: &str, n: &serde_json::Number) -> Result<MaskValue> {
    let bound = n.as_u64().and_then(|v| u32::try_from(v).ok());
    if is_range_key(name) {
        return bound.map(MaskValue::Range).ok_or_else(|| {
            MaskError::Representation(format!("range bound {n} under '{name}' out of range"))
        });
    }
    match bound {
        Some(1) => Ok(MaskValue::Positive),
        Some(0) => Ok(MaskValue::Negative),
        _ => Err(MaskError::Representation(format!(
            "polarity under field '{name}' must be 1 or 0, got {n}"
        ))),
    }
}
