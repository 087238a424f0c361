//! # Identity and Token Newtypes
//!
//! Account identities are 20-byte addresses. Credential identifiers are
//! 256-bit unsigned integers chosen by the issuing caller, never assigned by
//! the registry.
//!
//! `TokenId` serializes as a decimal string so that identifiers above
//! `u64::MAX` survive JSON consumers that read numbers as doubles.

use std::str::FromStr;

pub use alloy_primitives::Address;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Parse an account address from hex, with or without the `0x` prefix.
pub fn parse_address(input: &str) -> Result<Address, CoreError> {
    Address::from_str(input.trim()).map_err(|e| CoreError::InvalidAddress {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// Whether `address` is the null identity (all zero bytes).
pub fn is_null_identity(address: &Address) -> bool {
    address.is_zero()
}

/// Unique identifier of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenId(U256);

impl TokenId {
    /// The identifier `0`. A valid token id like any other.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap a raw 256-bit value.
    pub const fn new(value: U256) -> Self {
        Self(value)
    }

    /// Access the inner 256-bit value.
    pub fn as_u256(&self) -> &U256 {
        &self.0
    }

    /// Parse a token id from a decimal string or a `0x`-prefixed hex string.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidTokenId {
                input: input.to_string(),
                reason: "empty input".to_string(),
            });
        }
        U256::from_str(trimmed)
            .map(Self)
            .map_err(|e| CoreError::InvalidTokenId {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }
}

impl From<u64> for TokenId {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for TokenId {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl FromStr for TokenId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TokenId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TokenId> for String {
    fn from(value: TokenId) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
