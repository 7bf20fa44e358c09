use crate::errors::Error;
use crate::ledger::Ledger;
use crate::types::*;
use soroban_sdk::{Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
// Records must outlive the sale long enough for refunds to be claimed.
const RECORD_BUMP_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_state(env: &Env) -> Result<SaleState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

pub fn set_state(env: &Env, state: SaleState) {
    env.storage().instance().set(&DataKey::State, &state);
}

pub fn get_totals(env: &Env) -> SaleTotals {
    env.storage()
        .instance()
        .get(&DataKey::Totals)
        .unwrap_or_default()
}

pub fn set_totals(env: &Env, totals: &SaleTotals) {
    env.storage().instance().set(&DataKey::Totals, totals);
}

pub fn get_record(env: &Env, contributor: &Address) -> Option<ContributorRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(contributor.clone()))
}

pub fn set_record(env: &Env, record: &ContributorRecord) {
    let key = DataKey::Record(record.contributor.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// The sale aggregate: everything one invocation reads and may mutate.
/// Loaded once at the contract boundary and written back by `save`.
#[derive(Clone, Debug)]
pub struct Sale {
    pub config: SaleConfig,
    pub state: SaleState,
    pub ledger: Ledger,
}

impl Sale {
    pub fn load(env: &Env) -> Result<Self, Error> {
        let config = get_config(env)?;
        let state = get_state(env)?;
        Ok(Sale {
            config,
            state,
            ledger: Ledger::new(get_totals(env)),
        })
    }

    pub fn save(&self, env: &Env) {
        set_state(env, self.state);
        set_totals(env, self.ledger.totals());
        bump_instance(env);
    }
}
