//! # Registry Events
//!
//! Every successful state change appends exactly one record per event to
//! the [`EventLog`]. Sequence numbers start at zero and have no gaps.

use ntt_access::{Role, RoleEvent};
use ntt_core::{Address, Timestamp, TokenId};
use serde::{Deserialize, Serialize};

/// A domain event emitted by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "PascalCase")]
pub enum RegistryEvent {
    /// A credential was minted.
    Minted {
        /// The holder it was bound to.
        holder: Address,
        /// Its id.
        token_id: TokenId,
    },
    /// A credential was revoked.
    Revoked {
        /// The holder it remains bound to.
        holder: Address,
        /// Its id.
        token_id: TokenId,
    },
    /// Role membership was added.
    RoleGranted {
        /// The role granted.
        role: Role,
        /// The new member.
        account: Address,
        /// Who performed the grant.
        sender: Address,
    },
    /// Role membership was removed.
    RoleRevoked {
        /// The role revoked.
        role: Role,
        /// The former member.
        account: Address,
        /// Who performed the revocation.
        sender: Address,
    },
    /// A role's administering role was set.
    RoleAdminChanged {
        /// The role whose admin changed.
        role: Role,
        /// The administering role before.
        previous_admin: Role,
        /// The administering role after.
        new_admin: Role,
    },
}

impl From<RoleEvent> for RegistryEvent {
    fn from(event: RoleEvent) -> Self {
        match event {
            RoleEvent::RoleGranted { role, account, sender } => Self::RoleGranted { role, account, sender },
            RoleEvent::RoleRevoked { role, account, sender } => Self::RoleRevoked { role, account, sender },
            RoleEvent::RoleAdminChanged {
                role,
                previous_admin,
                new_admin,
            } => Self::RoleAdminChanged {
                role,
                previous_admin,
                new_admin,
            },
        }
    }
}

/// An event with its position in the log and the time it was recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Position in the log, starting at zero.
    pub sequence: u64,
    /// When the event was recorded.
    pub timestamp: Timestamp,
    /// The event itself.
    pub event: RegistryEvent,
}

/// Ordered, append-only event history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    records: Vec<EventRecord>,
}

impl EventLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `event` and return its sequence number.
    pub fn push(&mut self, timestamp: Timestamp, event: RegistryEvent) -> u64 {
        let sequence = self.records.len() as u64;
        self.records.push(EventRecord {
            sequence,
            timestamp,
            event,
        });
        sequence
    }

    /// Every record, oldest first.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Records with `sequence >= from`.
    pub fn since(&self, from: u64) -> &[EventRecord] {
        let start = usize::try_from(from).unwrap_or(usize::MAX).min(self.records.len());
        &self.records[start..]
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check that sequence numbers run 0, 1, 2, … without gaps.
    pub(crate) fn is_contiguous(&self) -> bool {
        self.records
            .iter()
            .enumerate()
            .all(|(i, record)| record.sequence == i as u64)
    }
}
