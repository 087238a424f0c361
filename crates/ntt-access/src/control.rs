//! # Access Control
//!
//! Role membership plus the role-admin table. Grant and revoke are
//! idempotent: granting a held role or revoking an unheld one succeeds
//! without emitting an event. Authorization failures leave membership
//! untouched.

use std::collections::{BTreeMap, BTreeSet};

use ntt_core::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::role::{Role, RoleAdminTable};

// ─── Errors ──────────────────────────────────────────────────────────

/// Authorization failures raised by the gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The caller does not hold the role the operation requires.
    #[error("account {account} is missing role {role}")]
    MissingRole {
        /// The rejected caller.
        account: Address,
        /// The role it needed.
        role: Role,
    },

    /// An identity tried to renounce a role on behalf of someone else.
    #[error("account {caller} can only renounce roles for itself, not for {account}")]
    RenounceOther {
        /// The caller.
        caller: Address,
        /// The account named in the call.
        account: Address,
    },
}

// ─── Events ──────────────────────────────────────────────────────────

/// Membership or hierarchy change emitted by the gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "PascalCase")]
pub enum RoleEvent {
    /// `account` was granted `role` by `sender`.
    RoleGranted {
        /// The role granted.
        role: Role,
        /// The new member.
        account: Address,
        /// Who performed the grant.
        sender: Address,
    },
    /// `account` lost `role`; `sender` is the account itself on renounce.
    RoleRevoked {
        /// The role revoked.
        role: Role,
        /// The former member.
        account: Address,
        /// Who performed the revocation.
        sender: Address,
    },
    /// `role` is now administered by `new_admin` instead of `previous_admin`.
    RoleAdminChanged {
        /// The role whose admin changed.
        role: Role,
        /// The administering role before.
        previous_admin: Role,
        /// The administering role after.
        new_admin: Role,
    },
}

// ─── Access Control ──────────────────────────────────────────────────

/// The RBAC gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessControl {
    admins: RoleAdminTable,
    members: BTreeMap<Role, BTreeSet<Address>>,
}

impl AccessControl {
    /// A gate governed by `admins` with `admin` holding Admin and `manager`
    /// holding Manager.
    ///
    /// Returns the gate together with the events of its setup, in order: one
    /// `RoleAdminChanged` for every role the table delegates away from the
    /// root Admin role, then the two bootstrap grants, both sent by `admin`.
    pub fn bootstrap(admins: RoleAdminTable, admin: &Address, manager: &Address) -> (Self, Vec<RoleEvent>) {
        let mut events: Vec<RoleEvent> = admins
            .iter()
            .filter(|(_, by)| *by != Role::Admin)
            .map(|(role, by)| RoleEvent::RoleAdminChanged {
                role,
                previous_admin: Role::Admin,
                new_admin: by,
            })
            .collect();
        let mut gate = Self {
            admins,
            members: BTreeMap::new(),
        };
        events.extend(gate.insert_member(Role::Admin, admin, admin));
        events.extend(gate.insert_member(Role::Manager, manager, admin));
        (gate, events)
    }

    /// Whether `account` holds `role`.
    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.members
            .get(&role)
            .is_some_and(|set| set.contains(account))
    }

    /// The role whose holders administer `role`.
    pub fn role_admin(&self, role: Role) -> Role {
        self.admins.admin_of(role)
    }

    /// The role-admin table this gate was built with.
    pub fn admin_table(&self) -> &RoleAdminTable {
        &self.admins
    }

    /// Fail with [`AccessError::MissingRole`] unless `account` holds `role`.
    pub fn check_role(&self, role: Role, account: &Address) -> Result<(), AccessError> {
        if self.has_role(role, account) {
            return Ok(());
        }
        tracing::debug!(%account, %role, "authorization denied");
        Err(AccessError::MissingRole {
            account: *account,
            role,
        })
    }

    /// Grant `role` to `account`. The caller must hold `role_admin(role)`.
    ///
    /// Returns `None` when `account` already held the role.
    pub fn grant_role(
        &mut self,
        caller: &Address,
        role: Role,
        account: &Address,
    ) -> Result<Option<RoleEvent>, AccessError> {
        self.check_role(self.role_admin(role), caller)?;
        Ok(self.insert_member(role, account, caller))
    }

    /// Revoke `role` from `account`. The caller must hold `role_admin(role)`.
    ///
    /// Returns `None` when `account` did not hold the role.
    pub fn revoke_role(
        &mut self,
        caller: &Address,
        role: Role,
        account: &Address,
    ) -> Result<Option<RoleEvent>, AccessError> {
        self.check_role(self.role_admin(role), caller)?;
        Ok(self.remove_member(role, account, caller))
    }

    /// Drop `role` from the caller itself. `account` must equal `caller`.
    pub fn renounce_role(
        &mut self,
        caller: &Address,
        role: Role,
        account: &Address,
    ) -> Result<Option<RoleEvent>, AccessError> {
        if caller != account {
            return Err(AccessError::RenounceOther {
                caller: *caller,
                account: *account,
            });
        }
        Ok(self.remove_member(role, account, caller))
    }

    /// Current holders of `role`, in address order.
    pub fn members(&self, role: Role) -> impl Iterator<Item = &Address> + '_ {
        self.members.get(&role).into_iter().flatten()
    }

    /// Number of identities holding `role`.
    pub fn member_count(&self, role: Role) -> usize {
        self.members.get(&role).map_or(0, BTreeSet::len)
    }

    fn insert_member(&mut self, role: Role, account: &Address, sender: &Address) -> Option<RoleEvent> {
        if !self.members.entry(role).or_default().insert(*account) {
            return None;
        }
        tracing::info!(%role, %account, %sender, "role granted");
        Some(RoleEvent::RoleGranted {
            role,
            account: *account,
            sender: *sender,
        })
    }

    fn remove_member(&mut self, role: Role, account: &Address, sender: &Address) -> Option<RoleEvent> {
        let removed = self
            .members
            .get_mut(&role)
            .is_some_and(|set| set.remove(account));
        if !removed {
            return None;
        }
        tracing::info!(%role, %account, %sender, "role revoked");
        Some(RoleEvent::RoleRevoked {
            role,
            account: *account,
            sender: *sender,
        })
    }
}
