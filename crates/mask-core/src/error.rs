//! Error types for mask encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur while decoding a mask string or converting the JSON
/// representation of a mask.
#[derive(Error, Debug)]
pub enum MaskError {
    /// The input string was not a well-formed mask. Carries the byte offset
    /// where the problem was detected and a bounded fragment of the input
    /// starting there.
    #[error("malformed mask at offset {offset} near '{fragment}': {message}")]
    Malformed {
        offset: usize,
        fragment: String,
        message: String,
    },

    /// The JSON representation of a mask contained a value outside the
    /// integer-coded scheme (1/0 polarity, non-negative range bounds under
    /// `start`/`count`, nested objects).
    #[error("invalid mask representation: {0}")]
    Representation(String),

    /// The decoder reached a state that is unreachable by construction.
    /// This is a defect in the automaton, not bad input.
    #[error("internal parser inconsistency: {0}")]
    Internal(String),
}

/// Convenience alias used throughout mask-core.
pub type Result<T> = std::result::Result<T, MaskError>;
