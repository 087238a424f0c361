//! # Error Types
//!
//! Parse and construction failures for the primitive types. Domain errors
//! (authorization, credential lifecycle) live next to the code that raises
//! them in `ntt-access` and `ntt-registry`.

use thiserror::Error;

/// Error raised while building or parsing a primitive value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The input is not a valid 20-byte hex address.
    #[error("invalid address {input:?}: {reason}")]
    InvalidAddress {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The input is not a valid 256-bit unsigned integer.
    #[error("invalid token id {input:?}: {reason}")]
    InvalidTokenId {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The input is not a valid UTC timestamp.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
