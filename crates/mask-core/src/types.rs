//! Mask tree types shared by the encoder and decoder.
//!
//! A mask is a nested mapping from field name to a [`MaskValue`]. Nodes use
//! `Vec<(String, MaskValue)>` as their backing store to maintain insertion
//! order without depending on `IndexMap` — serialization order is
//! insertion order, so the container must preserve it on iteration.

/// Reserved key naming the start bound of a pagination range.
pub const START_KEY: &str = "start";

/// Reserved key naming the count bound of a pagination range.
pub const COUNT_KEY: &str = "count";

/// True if `name` is one of the reserved pagination keys (`start`/`count`).
///
/// Only these keys may carry a [`MaskValue::Range`], and in trees produced
/// by the decoder they carry nothing else.
pub fn is_range_key(name: &str) -> bool {
    name == START_KEY || name == COUNT_KEY
}

/// The value bound to a field name inside a [`MaskNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskValue {
    /// Field is included in the projection. No children.
    Positive,
    /// Field is excluded from the projection. No children.
    Negative,
    /// Pagination bound. Only legal under [`START_KEY`] / [`COUNT_KEY`].
    Range(u32),
    /// Field carries a sub-mask restricting its own fields.
    Nested(MaskNode),
}

/// A single mask node: field name → [`MaskValue`], insertion order preserved.
///
/// Insertion order affects serialization order only, not semantics. Inserting
/// under an existing key replaces the value in place without moving the entry,
/// mirroring ordered-map semantics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskNode {
    entries: Vec<(String, MaskValue)>,
}

impl MaskNode {
    /// Create an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`. If `name` is already present, the old value is
    /// replaced and the entry keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: MaskValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, v)) => *v = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&MaskValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MaskValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields in this node (not counting nested children).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if this node has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, MaskValue)> for MaskNode {
    fn from_iter<I: IntoIterator<Item = (String, MaskValue)>>(iter: I) -> Self {
        let mut node = MaskNode::new();
        for (name, value) in iter {
            node.insert(name, value);
        }
        node
    }
}
