//! # Registry Errors
//!
//! Every variant is a precondition failure. A failed operation leaves the
//! registry exactly as it was before the call.

use ntt_access::{AccessError, Role};
use ntt_core::{Address, TokenId};
use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller lacks the role the operation requires.
    #[error("authorization failed: {0}")]
    Authorization(#[from] AccessError),

    /// The zero address was given where a real holder is required.
    #[error("address zero is not a valid holder")]
    InvalidHolder,

    /// No credential has been minted under this id.
    #[error("invalid token ID {0}")]
    InvalidToken(TokenId),

    /// A credential already exists under this id.
    #[error("cannot mint an assigned token: {0}")]
    AlreadyAssigned(TokenId),

    /// The credential was revoked earlier.
    #[error("credential {0} is already revoked")]
    AlreadyRevoked(TokenId),

    /// Per-holder index out of range.
    #[error("index {index} out of range for holder {holder} with balance {balance}")]
    InvalidIndex {
        /// The holder queried.
        holder: Address,
        /// The requested position.
        index: usize,
        /// How many credentials the holder has.
        balance: usize,
    },

    /// Construction was asked to seed a role to the zero address.
    #[error("cannot grant {role} to the zero address at construction")]
    ZeroIdentity {
        /// The role that would have been granted.
        role: Role,
    },

    /// A snapshot failed its consistency checks.
    #[error("corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}
