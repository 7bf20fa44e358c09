use soroban_sdk::{contracttype, Address};

/// Half-open purchase window `[start, end)` in ledger seconds.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleWindow {
    pub start: u64,
    pub end: u64,
}

/// Fixed-point conversion rate: `tokens = native * tokens_per_unit / 10^decimals`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ConversionRate {
    pub tokens_per_unit: i128,
    pub decimals: u32,
}

/// Contribution limits, all in native-asset units.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleCaps {
    pub min_contribution: i128,
    pub max_per_contributor: i128,
    pub soft_cap: i128,
    pub hard_cap: i128,
}

/// When an authorized finalize may close the sale before `window.end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum EarlyClose {
    /// Only once the hard cap has been exhausted.
    HardCapOnly,
    /// As soon as the soft cap is met.
    SoftCapReached,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub window: SaleWindow,
    pub rate: ConversionRate,
    pub caps: SaleCaps,
    pub beneficiary: Address,
    pub controller: Address,
    /// SEP-41 token contributors pay with.
    pub native_asset: Address,
    /// Contract exposing `credit_tokens`.
    pub token_issuer: Address,
    /// Delegates `is_controller` when set.
    pub controller_registry: Option<Address>,
    /// `is_allowed` allow-list when set.
    pub contributor_gate: Option<Address>,
    pub early_close: EarlyClose,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleState {
    Pending,
    Active,
    Paused,
    Finalized,
    Refunding,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ContributorRecord {
    pub contributor: Address,
    /// Cumulative native amount.
    pub contributed: i128,
    /// Cumulative token amount credited.
    pub entitlement: i128,
    pub refunded: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct SaleTotals {
    pub total_raised: i128,
    pub total_issued: i128,
    pub custody: i128,
    pub contributors: u32,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleSnapshot {
    pub state: SaleState,
    pub total_raised: i128,
    pub total_issued: i128,
    pub custody: i128,
    pub remaining_cap: i128,
    pub contributors: u32,
}

#[contracttype]
pub enum DataKey {
    Config,
    State,
    Totals,
    Record(Address),
}
