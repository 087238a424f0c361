//! # ntt-core — Foundational Types for the Passport Registry
//!
//! Defines the primitives every other crate in the workspace builds on.
//! It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Identities are addresses.** Holders, issuers and role members are all
//!    20-byte [`Address`] values. The zero address is the null identity and is
//!    rejected wherever a real holder is required.
//!
//! 2. **`TokenId` newtype.** Credential identifiers are 256-bit unsigned
//!    integers supplied by the caller. The newtype keeps them from being
//!    confused with counts or indices.
//!
//! 3. **UTC-only timestamps.** [`Timestamp`] is UTC with seconds precision.
//!
//! 4. **Time is injected.** The registry never reads the wall clock directly;
//!    it asks a [`Clock`]. Tests pin time with [`ManualClock`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ntt-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod temporal;

pub use error::CoreError;
pub use identity::{is_null_identity, parse_address, Address, TokenId};
pub use temporal::{Clock, ManualClock, SystemClock, Timestamp};
