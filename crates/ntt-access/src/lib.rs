//! # ntt-access — Role-Based Access Control Gate
//!
//! Decides, for every mutating registry call, whether the caller is
//! authorized. The gate owns role membership and nothing else; it has no
//! knowledge of credentials.
//!
//! ## Role Hierarchy
//!
//! ```text
//! Admin ──administers──▶ Admin (self-administering root)
//! Admin ──administers──▶ Manager
//! Manager ──administers──▶ Team
//! ```
//!
//! The "administers" relation is an explicit [`RoleAdminTable`] fixed when
//! the gate is built. Admin holders cannot manage Team directly.
//!
//! ## Guard
//!
//! [`AccessControl::check_role`] is the one authorization check. Registry
//! operations call it before touching any state. Membership enters a gate
//! only through [`AccessControl::bootstrap`] or an authorized grant.

pub mod control;
pub mod role;

pub use control::{AccessControl, AccessError, RoleEvent};
pub use role::{Role, RoleAdminTable, UnknownRole};
