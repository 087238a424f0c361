//! # Shared Registry Handle
//!
//! Thread-safe, cloneable wrapper around [`PassportRegistry`].
//!
//! Each mutating call holds the write lock across both the role check and
//! the state write, so two callers can never interleave a check with the
//! other's write. Reads take the read lock and see the state as of the last
//! completed mutation. The lock is `parking_lot` and is never held across
//! an `.await`.

use std::sync::Arc;

use ntt_access::Role;
use ntt_core::{Address, Clock, SystemClock, TokenId};
use parking_lot::RwLock;

use crate::credential::Credential;
use crate::error::RegistryError;
use crate::events::EventRecord;
use crate::registry::{PassportRegistry, RegistrySnapshot};

/// A registry shared between threads.
#[derive(Debug)]
pub struct SharedRegistry<C: Clock = SystemClock> {
    inner: Arc<RwLock<PassportRegistry<C>>>,
}

impl<C: Clock> Clone for SharedRegistry<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> From<PassportRegistry<C>> for SharedRegistry<C> {
    fn from(registry: PassportRegistry<C>) -> Self {
        Self::new(registry)
    }
}

impl<C: Clock> SharedRegistry<C> {
    /// Wrap an owned registry.
    pub fn new(registry: PassportRegistry<C>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Run `f` under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&PassportRegistry<C>) -> R) -> R {
        f(&self.inner.read())
    }

    /// See [`PassportRegistry::mint`].
    pub fn mint(&self, caller: &Address, holder: &Address, token_id: TokenId) -> Result<(), RegistryError> {
        self.inner.write().mint(caller, holder, token_id)
    }

    /// See [`PassportRegistry::revoke`].
    pub fn revoke(&self, caller: &Address, token_id: TokenId) -> Result<(), RegistryError> {
        self.inner.write().revoke(caller, token_id)
    }

    /// See [`PassportRegistry::grant_role`].
    pub fn grant_role(&self, caller: &Address, role: Role, account: &Address) -> Result<(), RegistryError> {
        self.inner.write().grant_role(caller, role, account)
    }

    /// See [`PassportRegistry::revoke_role`].
    pub fn revoke_role(&self, caller: &Address, role: Role, account: &Address) -> Result<(), RegistryError> {
        self.inner.write().revoke_role(caller, role, account)
    }

    /// See [`PassportRegistry::renounce_role`].
    pub fn renounce_role(&self, caller: &Address, role: Role, account: &Address) -> Result<(), RegistryError> {
        self.inner.write().renounce_role(caller, role, account)
    }

    /// See [`PassportRegistry::balance_of`].
    pub fn balance_of(&self, holder: &Address) -> Result<usize, RegistryError> {
        self.inner.read().balance_of(holder)
    }

    /// See [`PassportRegistry::owner_of`].
    pub fn owner_of(&self, token_id: TokenId) -> Result<Address, RegistryError> {
        self.inner.read().owner_of(token_id)
    }

    /// See [`PassportRegistry::get_credential`]. Returns a copy.
    pub fn get_credential(&self, token_id: TokenId) -> Result<Credential, RegistryError> {
        self.inner.read().get_credential(token_id).cloned()
    }

    /// See [`PassportRegistry::is_valid`].
    pub fn is_valid(&self, token_id: TokenId) -> Result<bool, RegistryError> {
        self.inner.read().is_valid(token_id)
    }

    /// See [`PassportRegistry::has_valid`].
    pub fn has_valid(&self, holder: &Address) -> bool {
        self.inner.read().has_valid(holder)
    }

    /// See [`PassportRegistry::has_role`].
    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.inner.read().has_role(role, account)
    }

    /// Events with `sequence >= from`, copied out.
    pub fn events_since(&self, from: u64) -> Vec<EventRecord> {
        self.inner.read().events_since(from).to_vec()
    }

    /// See [`PassportRegistry::snapshot`].
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.inner.read().snapshot()
    }
}
