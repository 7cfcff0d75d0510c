//! # mask-core
//!
//! Encoder and decoder for the compact **URI field-projection mask** format.
//!
//! A mask is a nested tree describing which fields of a data structure a
//! request should include or exclude, optionally with pagination sub-ranges.
//! Its textual form is a single line suitable for embedding in a query
//! parameter (percent-encoding is the caller's job):
//!
//! ```text
//! id,name,-secret,friends:(start:0,count:10,name)
//! ```
//!
//! ## Quick start
//!
//! ```rust
//! use mask_core::{decode, encode, MaskValue};
//!
//! let mask = decode("id,name,-secret,friends:(start:0,count:10,name)").unwrap();
//! assert_eq!(mask.get("id"), Some(&MaskValue::Positive));
//! assert_eq!(mask.get("secret"), Some(&MaskValue::Negative));
//!
//! // Canonical serialization round-trips structurally.
//! assert_eq!(encode(&mask), "id,name,-secret,friends:(start:0,count:10,name)");
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — mask string → [`MaskNode`] tree (explicit state machine)
//! - [`encoder`] — [`MaskNode`] tree → mask string (depth-first walk)
//! - [`json`] — conversion to/from the integer-coded JSON representation
//! - [`error`] — error types for decode/representation failures
//! - [`types`] — the mask tree data model

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod json;
pub mod types;

pub use decoder::decode;
pub use encoder::encode;
pub use error::MaskError;
pub use json::{from_json, to_json};
pub use types::{is_range_key, MaskNode, MaskValue, COUNT_KEY, START_KEY};
