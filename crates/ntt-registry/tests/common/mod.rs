//! Shared deployment fixture.
//!
//! Deploys a registry with `owner` as Admin and `manager` as Manager, has the
//! manager grant Team to `team_a` and `team_b`, then mints token 1 (valid)
//! and token 0 (revoked) to `account_e`.

#![allow(dead_code)]

use std::sync::Arc;

use ntt_registry::{Address, ManualClock, PassportRegistry, Role, Timestamp, TokenId};

pub const NAME: &str = "Registro Nacional de Pessoas Fisicas e Juridicas";
pub const SYMBOL: &str = "CPF/CNPJ";

pub struct Fixture {
    pub registry: PassportRegistry<Arc<ManualClock>>,
    pub clock: Arc<ManualClock>,
    pub owner: Address,
    pub manager: Address,
    pub team_a: Address,
    pub team_b: Address,
    pub account_a: Address,
    pub account_b: Address,
    pub account_c: Address,
    pub account_d: Address,
    pub account_e: Address,
    pub credential_id: TokenId,
    pub revoked_credential_id: TokenId,
}

pub fn deploy() -> Fixture {
    let clock = Arc::new(ManualClock::at(
        Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
    ));
    let owner = Address::repeat_byte(0x01);
    let manager = Address::repeat_byte(0x02);
    let team_a = Address::repeat_byte(0x0a);
    let team_b = Address::repeat_byte(0x0b);

    let mut registry =
        PassportRegistry::construct(owner, NAME, SYMBOL, manager, Arc::clone(&clock)).unwrap();
    registry.grant_role(&manager, Role::Team, &team_a).unwrap();
    registry.grant_role(&manager, Role::Team, &team_b).unwrap();

    let account_e = Address::repeat_byte(0xe0);
    registry.mint(&team_a, &account_e, TokenId::from(1)).unwrap();
    registry.mint(&team_a, &account_e, TokenId::ZERO).unwrap();
    registry.revoke(&team_a, TokenId::ZERO).unwrap();

    Fixture {
        registry,
        clock,
        owner,
        manager,
        team_a,
        team_b,
        account_a: Address::repeat_byte(0xa0),
        account_b: Address::repeat_byte(0xb0),
        account_c: Address::repeat_byte(0xc0),
        account_d: Address::repeat_byte(0xd0),
        account_e,
        credential_id: TokenId::from(1),
        revoked_credential_id: TokenId::ZERO,
    }
}

/// A token id that the fixture never mints.
pub fn fresh_id(n: u64) -> TokenId {
    TokenId::from(1_000_000 + n)
}
