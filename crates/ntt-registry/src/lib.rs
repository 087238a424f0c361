//! # ntt-registry — Non-Transferable Credential Registry
//!
//! An authority issues uniquely identified credentials ("passports") to
//! holder identities. Credentials can be revoked but never transferred or
//! destroyed, and anyone can ask whether a holder currently has a valid one.
//!
//! ## Modules
//!
//! - **Credential** (`credential.rs`): the credential record and the
//!   append-only store with its per-holder index.
//! - **Events** (`events.rs`): `Minted`, `Revoked` and role events, kept in
//!   an ordered log.
//! - **Registry** (`registry.rs`): construction, role-gated mint/revoke,
//!   role administration, queries, snapshots.
//! - **Shared** (`shared.rs`): lock-guarded handle for concurrent callers.
//!
//! ## Authorization
//!
//! | Operation | Required role |
//! |---|---|
//! | `mint`, `revoke` | Team |
//! | `grant_role` / `revoke_role` (Team) | Manager |
//! | `grant_role` / `revoke_role` (Manager, Admin) | Admin |
//! | queries | none |
//!
//! ## Crate Policy
//!
//! - No transfer, burn or holder-reassignment primitive, public or private.
//! - Failed operations change nothing and emit nothing.

pub mod credential;
pub mod error;
pub mod events;
pub mod registry;
pub mod shared;

pub use credential::{Credential, CredentialStore};
pub use error::RegistryError;
pub use events::{EventLog, EventRecord, RegistryEvent};
pub use registry::{PassportRegistry, RegistrySnapshot, TokenMetadata};
pub use shared::SharedRegistry;

pub use ntt_access::{AccessError, Role};
pub use ntt_core::{Address, Clock, ManualClock, SystemClock, Timestamp, TokenId};
