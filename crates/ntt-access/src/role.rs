//! # Roles and the Role-Admin Table

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A role an identity may hold. One identity may hold several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Root role. Administers itself and Manager.
    #[serde(rename = "DEFAULT_ADMIN_ROLE")]
    Admin,
    /// Administers Team.
    #[serde(rename = "MANAGER_ROLE")]
    Manager,
    /// May mint and revoke credentials.
    #[serde(rename = "TEAM_ROLE")]
    Team,
}

impl Role {
    /// Every role, in hierarchy order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Team];

    /// Canonical role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "DEFAULT_ADMIN_ROLE",
            Self::Manager => "MANAGER_ROLE",
            Self::Team => "TEAM_ROLE",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role name that matches none of the known roles.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown role {0:?} (expected admin, manager or team)")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEFAULT_ADMIN_ROLE" | "ADMIN" => Ok(Self::Admin),
            "MANAGER_ROLE" | "MANAGER" => Ok(Self::Manager),
            "TEAM_ROLE" | "TEAM" => Ok(Self::Team),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

// ─── Role-Admin Table ────────────────────────────────────────────────

/// Which role administers which.
///
/// Holders of `admin_of(role)` may grant and revoke `role`. Roles without an
/// entry are administered by [`Role::Admin`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleAdminTable {
    entries: BTreeMap<Role, Role>,
}

impl RoleAdminTable {
    /// The passport hierarchy: Admin administers Admin and Manager, Manager
    /// administers Team.
    pub fn passport() -> Self {
        Self::default()
            .with_admin(Role::Admin, Role::Admin)
            .with_admin(Role::Manager, Role::Admin)
            .with_admin(Role::Team, Role::Manager)
    }

    /// Set the administering role for `role`.
    pub fn with_admin(mut self, role: Role, admin: Role) -> Self {
        self.entries.insert(role, admin);
        self
    }

    /// The role whose holders may grant and revoke `role`.
    pub fn admin_of(&self, role: Role) -> Role {
        self.entries.get(&role).copied().unwrap_or(Role::Admin)
    }

    /// Table entries in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Role)> + '_ {
        self.entries.iter().map(|(role, admin)| (*role, *admin))
    }
}
