//! # Credentials and the Append-Only Store
//!
//! A [`Credential`] binds a holder to a token id. After issuance the only
//! thing that can change is the revocation flag, and only from `false` to
//! `true`.
//!
//! [`CredentialStore`] keeps credentials in mint order. It has no removal
//! or reassignment method; the holder index is derived from the records and
//! rebuilt when a store is deserialized.

use std::collections::HashMap;

use ntt_core::{Address, Timestamp, TokenId};
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

// ─── Credential ──────────────────────────────────────────────────────

/// A non-transferable credential ("passport").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    token_id: TokenId,
    holder: Address,
    issuer: Address,
    issue_date: Timestamp,
    revoked: bool,
}

impl Credential {
    pub(crate) fn issue(token_id: TokenId, holder: Address, issuer: Address, issue_date: Timestamp) -> Self {
        Self {
            token_id,
            holder,
            issuer,
            issue_date,
            revoked: false,
        }
    }

    /// The credential's unique id.
    pub fn token_id(&self) -> TokenId {
        self.token_id
    }

    /// The identity the credential is bound to.
    pub fn holder(&self) -> Address {
        self.holder
    }

    /// The Team member who minted it.
    pub fn issuer(&self) -> Address {
        self.issuer
    }

    /// When it was minted.
    pub fn issue_date(&self) -> Timestamp {
        self.issue_date
    }

    /// Whether it has been revoked.
    pub fn is_revoked(&self) -> bool {
        self.revoked
    }

    /// A credential is valid until it is revoked.
    pub fn is_valid(&self) -> bool {
        !self.revoked
    }
}

// ─── Store ───────────────────────────────────────────────────────────

/// Credentials in mint order, indexed by token id and by holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Credential>", into = "Vec<Credential>")]
pub struct CredentialStore {
    records: Vec<Credential>,
    by_token: HashMap<TokenId, usize>,
    by_holder: HashMap<Address, Vec<usize>>,
}

impl CredentialStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a credential. Fails if its token id is taken or its holder is
    /// the zero address.
    pub fn insert(&mut self, credential: Credential) -> Result<(), RegistryError> {
        if credential.holder.is_zero() {
            return Err(RegistryError::InvalidHolder);
        }
        if self.by_token.contains_key(&credential.token_id) {
            return Err(RegistryError::AlreadyAssigned(credential.token_id));
        }
        let position = self.records.len();
        self.by_token.insert(credential.token_id, position);
        self.by_holder.entry(credential.holder).or_default().push(position);
        self.records.push(credential);
        Ok(())
    }

    /// Look up a credential by id.
    pub fn get(&self, token_id: &TokenId) -> Option<&Credential> {
        self.by_token.get(token_id).map(|&i| &self.records[i])
    }

    /// Whether a credential exists under `token_id`.
    pub fn contains(&self, token_id: &TokenId) -> bool {
        self.by_token.contains_key(token_id)
    }

    /// Flip the revocation flag of `token_id`.
    pub fn mark_revoked(&mut self, token_id: &TokenId) -> Result<&Credential, RegistryError> {
        let &position = self
            .by_token
            .get(token_id)
            .ok_or(RegistryError::InvalidToken(*token_id))?;
        let credential = &mut self.records[position];
        if credential.revoked {
            return Err(RegistryError::AlreadyRevoked(*token_id));
        }
        credential.revoked = true;
        Ok(credential)
    }

    /// The holder's credentials in mint order.
    pub fn held_by<'a>(&'a self, holder: &Address) -> impl Iterator<Item = &'a Credential> + 'a {
        self.by_holder
            .get(holder)
            .into_iter()
            .flatten()
            .map(move |&i| &self.records[i])
    }

    /// Number of credentials ever minted to `holder`.
    pub fn balance(&self, holder: &Address) -> usize {
        self.by_holder.get(holder).map_or(0, Vec::len)
    }

    /// The `index`-th credential minted to `holder`.
    pub fn held_at(&self, holder: &Address, index: usize) -> Option<&Credential> {
        self.by_holder
            .get(holder)
            .and_then(|positions| positions.get(index))
            .map(|&i| &self.records[i])
    }

    /// Number of credentials ever minted.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been minted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct identities that have been minted to.
    pub fn holders_count(&self) -> usize {
        self.by_holder.len()
    }

    /// All credentials in mint order.
    pub fn iter(&self) -> impl Iterator<Item = &Credential> {
        self.records.iter()
    }
}

impl TryFrom<Vec<Credential>> for CredentialStore {
    type Error = RegistryError;

    fn try_from(records: Vec<Credential>) -> Result<Self, Self::Error> {
        let mut store = Self::new();
        for credential in records {
            store
                .insert(credential)
                .map_err(|e| RegistryError::CorruptSnapshot(e.to_string()))?;
        }
        Ok(store)
    }
}

impl From<CredentialStore> for Vec<Credential> {
    fn from(store: CredentialStore) -> Self {
        store.records
    }
}
