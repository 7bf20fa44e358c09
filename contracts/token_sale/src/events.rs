use crate::types::{SaleState, SaleWindow};
use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ==================== Event Payload Structs ====================
// Published under ("SALE", symbol_short!("…")). Timestamps are the `now` the
// operation ran with.

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InitializedEvent {
    pub controller: Address,
    pub beneficiary: Address,
    pub window: SaleWindow,
    pub soft_cap: i128,
    pub hard_cap: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PurchaseEvent {
    pub contributor: Address,
    pub native_amount: i128,
    pub token_amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct FinalizedEvent {
    pub beneficiary: Address,
    pub total_released: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RefundEnabledEvent {
    pub total_raised: i128,
    pub soft_cap: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RefundClaimedEvent {
    pub contributor: Address,
    pub native_amount: i128,
    pub timestamp: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StateChangedEvent {
    pub from: SaleState,
    pub to: SaleState,
    /// None when the transition was time-driven (activation).
    pub actor: Option<Address>,
    pub timestamp: u64,
}

// ==================== Emit Functions ====================

pub fn emit_initialized(env: &Env, event: InitializedEvent) {
    env.events()
        .publish(("SALE", symbol_short!("INIT")), event);
}

pub fn emit_purchase(
    env: &Env,
    contributor: Address,
    native_amount: i128,
    token_amount: i128,
    timestamp: u64,
) {
    env.events().publish(
        ("SALE", symbol_short!("PURCHASE")),
        PurchaseEvent {
            contributor,
            native_amount,
            token_amount,
            timestamp,
        },
    );
}

pub fn emit_finalized(env: &Env, beneficiary: Address, total_released: i128, timestamp: u64) {
    env.events().publish(
        ("SALE", symbol_short!("FINALIZED")),
        FinalizedEvent {
            beneficiary,
            total_released,
            timestamp,
        },
    );
}

pub fn emit_refund_enabled(env: &Env, total_raised: i128, soft_cap: i128, timestamp: u64) {
    env.events().publish(
        ("SALE", symbol_short!("REFUND_ON")),
        RefundEnabledEvent {
            total_raised,
            soft_cap,
            timestamp,
        },
    );
}

pub fn emit_refund_claimed(env: &Env, contributor: Address, native_amount: i128, timestamp: u64) {
    env.events().publish(
        ("SALE", symbol_short!("REFUNDED")),
        RefundClaimedEvent {
            contributor,
            native_amount,
            timestamp,
        },
    );
}

pub fn emit_state_changed(
    env: &Env,
    from: SaleState,
    to: SaleState,
    actor: Option<Address>,
    timestamp: u64,
) {
    env.events().publish(
        ("SALE", symbol_short!("STATE")),
        StateChangedEvent {
            from,
            to,
            actor,
            timestamp,
        },
    );
}
