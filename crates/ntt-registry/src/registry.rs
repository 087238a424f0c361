//! # Passport Registry
//!
//! The stateful core: owns the credential store, the RBAC gate and the
//! event log, and exposes mint, revoke and the read queries.
//!
//! ## Lifecycle
//!
//! ```text
//! (absent) ──mint──▶ Valid ──revoke──▶ Revoked
//! ```
//!
//! A credential never leaves the store and never changes holder. There is no
//! transfer or burn operation.
//!
//! ## Atomicity
//!
//! Every mutating method runs all precondition checks before writing
//! anything. A returned error means nothing changed. Cross-thread atomicity
//! is the job of [`SharedRegistry`](crate::SharedRegistry).

use ntt_access::{AccessControl, Role, RoleAdminTable, RoleEvent};
use ntt_core::{Address, Clock, SystemClock, Timestamp, TokenId};
use serde::{Deserialize, Serialize};

use crate::credential::{Credential, CredentialStore};
use crate::error::RegistryError;
use crate::events::{EventLog, EventRecord, RegistryEvent};

/// Display name and ticker of a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Human-readable registry name.
    pub name: String,
    /// Short symbol.
    pub symbol: String,
}

/// Serializable state of a registry, minus its clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Name and symbol.
    pub metadata: TokenMetadata,
    /// Role table and memberships.
    pub access: AccessControl,
    /// Every credential ever minted, in mint order.
    pub credentials: CredentialStore,
    /// Every event ever emitted.
    pub events: EventLog,
}

/// The non-transferable credential registry.
#[derive(Debug)]
pub struct PassportRegistry<C: Clock = SystemClock> {
    metadata: TokenMetadata,
    access: AccessControl,
    credentials: CredentialStore,
    events: EventLog,
    last_stamp: Option<Timestamp>,
    clock: C,
}

impl<C: Clock> PassportRegistry<C> {
    /// Deploy a registry.
    ///
    /// `deployer` receives Admin, `manager` receives Manager, and Team is
    /// administered by Manager. Both identities must be non-zero.
    pub fn construct(
        deployer: Address,
        name: impl Into<String>,
        symbol: impl Into<String>,
        manager: Address,
        clock: C,
    ) -> Result<Self, RegistryError> {
        if deployer.is_zero() {
            return Err(RegistryError::ZeroIdentity { role: Role::Admin });
        }
        if manager.is_zero() {
            return Err(RegistryError::ZeroIdentity { role: Role::Manager });
        }

        let (access, setup) = AccessControl::bootstrap(RoleAdminTable::passport(), &deployer, &manager);
        let mut registry = Self {
            metadata: TokenMetadata {
                name: name.into(),
                symbol: symbol.into(),
            },
            access,
            credentials: CredentialStore::new(),
            events: EventLog::new(),
            last_stamp: None,
            clock,
        };

        for event in setup {
            registry.emit(event.into());
        }

        tracing::info!(
            name = %registry.metadata.name,
            symbol = %registry.metadata.symbol,
            admin = %deployer,
            %manager,
            "passport registry constructed"
        );
        Ok(registry)
    }

    /// Rebuild a registry from a snapshot.
    ///
    /// Role membership and credentials are rebuilt by replaying the event
    /// log through the guarded operations; the serialized gate and store
    /// must equal the replayed ones or the snapshot is rejected as corrupt.
    pub fn restore(snapshot: RegistrySnapshot, clock: C) -> Result<Self, RegistryError> {
        let (access, credentials) = replay(&snapshot)?;
        let last_stamp = snapshot.events.records().last().map(|r| r.timestamp);
        tracing::debug!(
            events = snapshot.events.len(),
            credentials = credentials.len(),
            "registry restored from snapshot"
        );
        Ok(Self {
            metadata: snapshot.metadata,
            access,
            credentials,
            events: snapshot.events,
            last_stamp,
            clock,
        })
    }

    /// Copy out the full state.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            metadata: self.metadata.clone(),
            access: self.access.clone(),
            credentials: self.credentials.clone(),
            events: self.events.clone(),
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Issue credential `token_id` to `holder`. Caller must hold Team.
    pub fn mint(&mut self, caller: &Address, holder: &Address, token_id: TokenId) -> Result<(), RegistryError> {
        self.access.check_role(Role::Team, caller)?;
        if holder.is_zero() {
            tracing::debug!(%token_id, "mint rejected: zero holder");
            return Err(RegistryError::InvalidHolder);
        }
        if self.credentials.contains(&token_id) {
            tracing::debug!(%token_id, %holder, "mint rejected: token id already assigned");
            return Err(RegistryError::AlreadyAssigned(token_id));
        }

        let issue_date = self.stamp();
        self.credentials
            .insert(Credential::issue(token_id, *holder, *caller, issue_date))?;
        tracing::info!(%token_id, %holder, issuer = %caller, %issue_date, "credential minted");
        self.events.push(
            issue_date,
            RegistryEvent::Minted {
                holder: *holder,
                token_id,
            },
        );
        Ok(())
    }

    /// Revoke credential `token_id`. Caller must hold Team.
    pub fn revoke(&mut self, caller: &Address, token_id: TokenId) -> Result<(), RegistryError> {
        self.access.check_role(Role::Team, caller)?;
        let holder = self.credentials.mark_revoked(&token_id)?.holder();
        tracing::info!(%token_id, %holder, revoker = %caller, "credential revoked");
        self.emit(RegistryEvent::Revoked { holder, token_id });
        Ok(())
    }

    /// Grant `role` to `account`. Caller must hold the role's admin role.
    pub fn grant_role(&mut self, caller: &Address, role: Role, account: &Address) -> Result<(), RegistryError> {
        let event = self.access.grant_role(caller, role, account)?;
        self.emit_role(event);
        Ok(())
    }

    /// Revoke `role` from `account`. Caller must hold the role's admin role.
    pub fn revoke_role(&mut self, caller: &Address, role: Role, account: &Address) -> Result<(), RegistryError> {
        let event = self.access.revoke_role(caller, role, account)?;
        self.emit_role(event);
        Ok(())
    }

    /// Give up `role`. `account` must be the caller.
    pub fn renounce_role(&mut self, caller: &Address, role: Role, account: &Address) -> Result<(), RegistryError> {
        let event = self.access.renounce_role(caller, role, account)?;
        self.emit_role(event);
        Ok(())
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Registry name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Registry symbol.
    pub fn symbol(&self) -> &str {
        &self.metadata.symbol
    }

    /// Credentials ever minted to `holder`, revoked ones included.
    pub fn balance_of(&self, holder: &Address) -> Result<usize, RegistryError> {
        if holder.is_zero() {
            return Err(RegistryError::InvalidHolder);
        }
        Ok(self.credentials.balance(holder))
    }

    /// The holder of `token_id`.
    pub fn owner_of(&self, token_id: TokenId) -> Result<Address, RegistryError> {
        self.get_credential(token_id).map(Credential::holder)
    }

    /// The full record of `token_id`.
    pub fn get_credential(&self, token_id: TokenId) -> Result<&Credential, RegistryError> {
        self.credentials
            .get(&token_id)
            .ok_or(RegistryError::InvalidToken(token_id))
    }

    /// Whether `token_id` has not been revoked.
    pub fn is_valid(&self, token_id: TokenId) -> Result<bool, RegistryError> {
        self.get_credential(token_id).map(Credential::is_valid)
    }

    /// Whether `holder` has at least one unrevoked credential.
    ///
    /// Linear in the holder's credential count; stops at the first match.
    pub fn has_valid(&self, holder: &Address) -> bool {
        self.credentials.held_by(holder).any(Credential::is_valid)
    }

    /// Whether `account` holds `role`.
    pub fn has_role(&self, role: Role, account: &Address) -> bool {
        self.access.has_role(role, account)
    }

    /// The role that administers `role`.
    pub fn role_admin(&self, role: Role) -> Role {
        self.access.role_admin(role)
    }

    /// Current holders of `role`.
    pub fn role_members(&self, role: Role) -> Vec<Address> {
        self.access.members(role).copied().collect()
    }

    /// Number of credentials ever minted.
    pub fn emitted_count(&self) -> usize {
        self.credentials.len()
    }

    /// Number of distinct identities ever minted to.
    pub fn holders_count(&self) -> usize {
        self.credentials.holders_count()
    }

    /// The `index`-th credential minted to `holder`.
    pub fn token_of_owner_by_index(&self, holder: &Address, index: usize) -> Result<TokenId, RegistryError> {
        let balance = self.balance_of(holder)?;
        self.credentials
            .held_at(holder, index)
            .map(Credential::token_id)
            .ok_or(RegistryError::InvalidIndex {
                holder: *holder,
                index,
                balance,
            })
    }

    /// Every credential minted to `holder`, in mint order.
    pub fn credentials_of(&self, holder: &Address) -> Vec<&Credential> {
        self.credentials.held_by(holder).collect()
    }

    /// The whole event history.
    pub fn events(&self) -> &[EventRecord] {
        self.events.records()
    }

    /// Events with `sequence >= from`.
    pub fn events_since(&self, from: u64) -> &[EventRecord] {
        self.events.since(from)
    }

    /// The clock this registry stamps with.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Current time, never earlier than the previous stamp.
    fn stamp(&mut self) -> Timestamp {
        let now = self.clock.now();
        let stamp = match self.last_stamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn emit(&mut self, event: RegistryEvent) {
        let timestamp = self.stamp();
        self.events.push(timestamp, event);
    }

    fn emit_role(&mut self, event: Option<RoleEvent>) {
        if let Some(event) = event {
            self.emit(event.into());
        }
    }
}

fn corrupt(msg: impl Into<String>) -> RegistryError {
    RegistryError::CorruptSnapshot(msg.into())
}

/// The Admin and Manager granted by the deployment events at the head of the log.
fn deployment_identities(records: &[EventRecord], delegations: usize) -> Option<(Address, Address)> {
    match (records.get(delegations), records.get(delegations + 1)) {
        (
            Some(EventRecord {
                event: RegistryEvent::RoleGranted {
                    role: Role::Admin,
                    account: admin,
                    ..
                },
                ..
            }),
            Some(EventRecord {
                event: RegistryEvent::RoleGranted {
                    role: Role::Manager,
                    account: manager,
                    ..
                },
                ..
            }),
        ) => Some((*admin, *manager)),
        _ => None,
    }
}

/// Replay the event log of `snapshot` and return the gate and store it implies.
fn replay(snapshot: &RegistrySnapshot) -> Result<(AccessControl, CredentialStore), RegistryError> {
    if !snapshot.events.is_contiguous() {
        return Err(corrupt("event sequence numbers are not contiguous"));
    }
    let records = snapshot.events.records();

    let table = RoleAdminTable::passport();
    let delegations = table.iter().filter(|(_, by)| *by != Role::Admin).count();
    let (admin, manager) = deployment_identities(records, delegations)
        .ok_or_else(|| corrupt("event log does not start with a registry deployment"))?;
    if admin.is_zero() || manager.is_zero() {
        return Err(corrupt("deployment grants a role to address zero"));
    }
    let (mut access, setup) = AccessControl::bootstrap(table, &admin, &manager);
    let deployed = records
        .iter()
        .map(|r| &r.event)
        .zip(setup.iter().cloned().map(RegistryEvent::from))
        .all(|(recorded, expected)| *recorded == expected);
    if !deployed {
        return Err(corrupt("deployment events differ from the passport hierarchy"));
    }

    let mut credentials = CredentialStore::new();
    for record in &records[setup.len()..] {
        let at = record.sequence;
        match &record.event {
            RegistryEvent::RoleGranted { role, account, sender } => {
                let granted = access
                    .grant_role(sender, *role, account)
                    .map_err(|e| corrupt(format!("event {at}: {e}")))?;
                if granted.is_none() {
                    return Err(corrupt(format!("event {at}: {account} already held {role}")));
                }
            }
            RegistryEvent::RoleRevoked { role, account, sender } => {
                let renounced = sender == account && !access.has_role(access.role_admin(*role), sender);
                let revoked = if renounced {
                    access.renounce_role(sender, *role, account)
                } else {
                    access.revoke_role(sender, *role, account)
                }
                .map_err(|e| corrupt(format!("event {at}: {e}")))?;
                if revoked.is_none() {
                    return Err(corrupt(format!("event {at}: {account} did not hold {role}")));
                }
            }
            RegistryEvent::RoleAdminChanged { role, .. } => {
                return Err(corrupt(format!("event {at}: admin of {role} changed after deployment")));
            }
            RegistryEvent::Minted { holder, token_id } => {
                let stored = snapshot
                    .credentials
                    .get(token_id)
                    .ok_or_else(|| corrupt(format!("Minted event for {token_id} has no matching credential")))?;
                if stored.holder() != *holder || stored.issue_date() != record.timestamp {
                    return Err(corrupt(format!("credential {token_id} differs from its Minted event")));
                }
                access
                    .check_role(Role::Team, &stored.issuer())
                    .map_err(|e| corrupt(format!("event {at}: issuer of {token_id}: {e}")))?;
                credentials
                    .insert(Credential::issue(*token_id, *holder, stored.issuer(), record.timestamp))
                    .map_err(|e| corrupt(format!("event {at}: {e}")))?;
            }
            RegistryEvent::Revoked { holder, token_id } => {
                let revoked = credentials
                    .mark_revoked(token_id)
                    .map_err(|e| corrupt(format!("event {at}: {e}")))?;
                if revoked.holder() != *holder {
                    return Err(corrupt(format!("Revoked event for {token_id} names the wrong holder")));
                }
            }
        }
    }

    if credentials != snapshot.credentials {
        return Err(corrupt("credential records differ from the event log"));
    }
    if access != snapshot.access {
        return Err(corrupt("role membership differs from the event log"));
    }
    Ok((access, credentials))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ntt_core::ManualClock;

    use super::*;

    const OWNER: Address = Address::repeat_byte(0x01);
    const MANAGER: Address = Address::repeat_byte(0x02);
    const TEAM_A: Address = Address::repeat_byte(0x0a);
    const HOLDER: Address = Address::repeat_byte(0x0e);

    fn make_registry() -> PassportRegistry<Arc<ManualClock>> {
        let clock = Arc::new(ManualClock::at(Timestamp::parse("2026-01-15T12:00:00Z").unwrap()));
        let mut registry = PassportRegistry::construct(OWNER, "Registry", "REG", MANAGER, clock).unwrap();
        registry.grant_role(&MANAGER, Role::Team, &TEAM_A).unwrap();
        registry
    }

    #[test]
    fn construct_seeds_roles_and_hierarchy() {
        let registry = make_registry();
        assert!(registry.has_role(Role::Admin, &OWNER));
        assert!(!registry.has_role(Role::Manager, &OWNER));
        assert!(!registry.has_role(Role::Team, &OWNER));
        assert!(registry.has_role(Role::Manager, &MANAGER));
        assert!(!registry.has_role(Role::Admin, &MANAGER));
        assert!(!registry.has_role(Role::Team, &MANAGER));
        assert_eq!(registry.role_admin(Role::Team), Role::Manager);
        assert_eq!(registry.role_admin(Role::Manager), Role::Admin);
        assert_eq!(registry.role_admin(Role::Admin), Role::Admin);
        assert_eq!(registry.name(), "Registry");
        assert_eq!(registry.symbol(), "REG");
    }

    #[test]
    fn construct_rejects_zero_manager() {
        let err = PassportRegistry::construct(OWNER, "R", "R", Address::ZERO, SystemClock).unwrap_err();
        assert_eq!(err, RegistryError::ZeroIdentity { role: Role::Manager });
    }

    #[test]
    fn construct_rejects_zero_deployer() {
        let err = PassportRegistry::construct(Address::ZERO, "R", "R", MANAGER, SystemClock).unwrap_err();
        assert_eq!(err, RegistryError::ZeroIdentity { role: Role::Admin });
    }

    #[test]
    fn mint_records_issuer_and_date() {
        let mut registry = make_registry();
        registry.clock().advance(60);
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(1)).unwrap();
        let c = registry.get_credential(TokenId::from(1)).unwrap();
        assert_eq!(c.issuer(), TEAM_A);
        assert_eq!(c.holder(), HOLDER);
        assert_eq!(c.issue_date().to_iso8601(), "2026-01-15T12:01:00Z");
        assert!(!c.is_revoked());
    }

    #[test]
    fn issue_dates_never_go_backwards() {
        let mut registry = make_registry();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(1)).unwrap();
        registry
            .clock()
            .set(Timestamp::parse("2020-01-01T00:00:00Z").unwrap());
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(2)).unwrap();
        let first = registry.get_credential(TokenId::from(1)).unwrap().issue_date();
        let second = registry.get_credential(TokenId::from(2)).unwrap().issue_date();
        assert!(second >= first);
    }

    #[test]
    fn mint_checks_role_before_holder() {
        let mut registry = make_registry();
        let err = registry.mint(&HOLDER, &Address::ZERO, TokenId::from(1)).unwrap_err();
        assert!(matches!(err, RegistryError::Authorization(_)));
    }

    #[test]
    fn failed_mint_emits_nothing() {
        let mut registry = make_registry();
        let before = registry.events().len();
        assert!(registry.mint(&TEAM_A, &Address::ZERO, TokenId::from(1)).is_err());
        assert_eq!(registry.events().len(), before);
        assert_eq!(registry.emitted_count(), 0);
    }

    #[test]
    fn revoke_emits_with_holder() {
        let mut registry = make_registry();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(4)).unwrap();
        let seq = registry.events().len() as u64;
        registry.revoke(&TEAM_A, TokenId::from(4)).unwrap();
        let tail = registry.events_since(seq);
        assert_eq!(tail.len(), 1);
        assert_eq!(
            tail[0].event,
            RegistryEvent::Revoked {
                holder: HOLDER,
                token_id: TokenId::from(4),
            }
        );
    }

    #[test]
    fn idempotent_role_grant_emits_once() {
        let mut registry = make_registry();
        let before = registry.events().len();
        registry.grant_role(&MANAGER, Role::Team, &TEAM_A).unwrap();
        assert_eq!(registry.events().len(), before);
    }

    #[test]
    fn construction_events_in_order() {
        let registry = make_registry();
        let events: Vec<_> = registry.events().iter().map(|r| r.event.clone()).collect();
        assert_eq!(
            events,
            vec![
                RegistryEvent::RoleAdminChanged {
                    role: Role::Team,
                    previous_admin: Role::Admin,
                    new_admin: Role::Manager,
                },
                RegistryEvent::RoleGranted {
                    role: Role::Admin,
                    account: OWNER,
                    sender: OWNER,
                },
                RegistryEvent::RoleGranted {
                    role: Role::Manager,
                    account: MANAGER,
                    sender: OWNER,
                },
                RegistryEvent::RoleGranted {
                    role: Role::Team,
                    account: TEAM_A,
                    sender: MANAGER,
                },
            ]
        );
    }

    #[test]
    fn token_of_owner_by_index_follows_mint_order() {
        let mut registry = make_registry();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(9)).unwrap();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(3)).unwrap();
        assert_eq!(registry.token_of_owner_by_index(&HOLDER, 0).unwrap(), TokenId::from(9));
        assert_eq!(registry.token_of_owner_by_index(&HOLDER, 1).unwrap(), TokenId::from(3));
        assert_eq!(
            registry.token_of_owner_by_index(&HOLDER, 2).unwrap_err(),
            RegistryError::InvalidIndex {
                holder: HOLDER,
                index: 2,
                balance: 2,
            }
        );
        assert_eq!(registry.holders_count(), 1);
    }

    #[test]
    fn snapshot_restores_equal_state() {
        let mut registry = make_registry();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(1)).unwrap();
        registry.revoke(&TEAM_A, TokenId::from(1)).unwrap();

        let snapshot = registry.snapshot();
        let restored = PassportRegistry::restore(snapshot.clone(), SystemClock).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.is_valid(TokenId::from(1)), Ok(false));
        assert!(restored.has_role(Role::Team, &TEAM_A));
    }

    #[test]
    fn restore_rejects_missing_mint_event() {
        let mut registry = make_registry();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(1)).unwrap();
        let mut snapshot = registry.snapshot();
        snapshot.events = EventLog::new();
        let err = PassportRegistry::restore(snapshot, SystemClock).unwrap_err();
        assert!(matches!(err, RegistryError::CorruptSnapshot(_)));
    }

    #[test]
    fn restore_rejects_foreign_hierarchy() {
        let registry = make_registry();
        let mut snapshot = registry.snapshot();
        snapshot.access = AccessControl::bootstrap(RoleAdminTable::default(), &OWNER, &MANAGER).0;
        assert!(matches!(
            PassportRegistry::restore(snapshot, SystemClock),
            Err(RegistryError::CorruptSnapshot(_))
        ));
    }

    const INTRUDER: Address = Address::repeat_byte(0x66);

    fn assert_corrupt(snapshot: RegistrySnapshot) {
        let err = PassportRegistry::restore(snapshot, SystemClock).unwrap_err();
        assert!(matches!(err, RegistryError::CorruptSnapshot(_)), "{err}");
    }

    fn tampered(snapshot: &RegistrySnapshot, edit: impl FnOnce(&mut serde_json::Value)) -> RegistrySnapshot {
        let mut json = serde_json::to_value(snapshot).unwrap();
        edit(&mut json);
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn restore_rejects_membership_without_grant_event() {
        let registry = make_registry();
        let mut snapshot = registry.snapshot();
        snapshot
            .access
            .grant_role(&MANAGER, Role::Team, &INTRUDER)
            .unwrap();
        assert_corrupt(snapshot);
    }

    #[test]
    fn restore_rejects_member_added_to_state_file() {
        let registry = make_registry();
        let snapshot = tampered(&registry.snapshot(), |json| {
            json["access"]["members"]["TEAM_ROLE"]
                .as_array_mut()
                .unwrap()
                .push(serde_json::json!(INTRUDER));
        });
        assert!(snapshot.access.has_role(Role::Team, &INTRUDER));
        assert_corrupt(snapshot);
    }

    #[test]
    fn restore_rejects_grant_from_unauthorized_sender() {
        let registry = make_registry();
        let mut snapshot = registry.snapshot();
        snapshot.access.grant_role(&MANAGER, Role::Team, &INTRUDER).unwrap();
        let stamp = snapshot.events.records().last().unwrap().timestamp;
        snapshot.events.push(
            stamp,
            RegistryEvent::RoleGranted {
                role: Role::Team,
                account: INTRUDER,
                sender: INTRUDER,
            },
        );
        assert_corrupt(snapshot);
    }

    #[test]
    fn restore_rejects_edited_issuer_and_issue_date() {
        let mut registry = make_registry();
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(1)).unwrap();
        let snapshot = registry.snapshot();

        assert_corrupt(tampered(&snapshot, |json| {
            json["credentials"][0]["issuer"] = serde_json::json!(OWNER);
        }));
        assert_corrupt(tampered(&snapshot, |json| {
            json["credentials"][0]["issueDate"] = serde_json::json!("2020-01-01T00:00:00Z");
        }));
    }

    #[test]
    fn restore_replays_role_removals() {
        let mut registry = make_registry();
        let team_b = Address::repeat_byte(0x0b);
        registry.grant_role(&MANAGER, Role::Team, &team_b).unwrap();
        registry.mint(&team_b, &HOLDER, TokenId::from(2)).unwrap();
        registry.revoke_role(&MANAGER, Role::Team, &team_b).unwrap();
        registry.renounce_role(&TEAM_A, Role::Team, &TEAM_A).unwrap();

        let snapshot = registry.snapshot();
        let restored = PassportRegistry::restore(snapshot.clone(), SystemClock).unwrap();
        assert_eq!(restored.snapshot(), snapshot);
        assert!(restored.role_members(Role::Team).is_empty());
        assert_eq!(restored.get_credential(TokenId::from(2)).unwrap().issuer(), team_b);
    }

    #[test]
    fn minted_event_carries_issue_date() {
        let mut registry = make_registry();
        registry.clock().advance(90);
        registry.mint(&TEAM_A, &HOLDER, TokenId::from(1)).unwrap();
        let record = registry.events().last().unwrap();
        let issued = registry.get_credential(TokenId::from(1)).unwrap().issue_date();
        assert_eq!(record.timestamp, issued);
    }
}
