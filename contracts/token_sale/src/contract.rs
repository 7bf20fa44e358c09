use crate::caps;
use crate::controller;
use crate::errors::Error;
use crate::events::{self, InitializedEvent};
use crate::fixed_point::{to_tokens, MAX_RATE_DECIMALS};
use crate::logging;
use crate::purchase;
use crate::storage::{self, Sale};
use crate::types::*;
use crate::vault;
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped Token Sale with Soft-Cap Refunds"
);

#[contract]
pub struct TokenSaleContract;

/// The one clock the sale reads; everything below receives `now` from here.
fn ledger_now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

fn validate_config(config: &SaleConfig) -> Result<(), Error> {
    let caps = &config.caps;
    let valid = config.window.start < config.window.end
        && config.rate.tokens_per_unit > 0
        && config.rate.decimals <= MAX_RATE_DECIMALS
        && caps.min_contribution >= 1
        && caps.min_contribution <= caps.max_per_contributor
        && caps.soft_cap >= 0
        && caps.soft_cap <= caps.hard_cap
        && caps.hard_cap > 0;
    if !valid {
        return Err(Error::InvalidConfig);
    }
    // The minimum contribution must buy at least one token base unit.
    match to_tokens(caps.min_contribution, &config.rate) {
        Ok(tokens) if tokens >= 1 => Ok(()),
        _ => Err(Error::InvalidConfig),
    }
}

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale in the `Pending` state. The controller must sign.
    pub fn initialize(env: Env, config: SaleConfig) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        config.controller.require_auth();
        validate_config(&config)?;

        storage::set_config(&env, &config);
        storage::set_state(&env, SaleState::Pending);
        storage::set_totals(&env, &SaleTotals::default());
        storage::bump_instance(&env);

        events::emit_initialized(
            &env,
            InitializedEvent {
                controller: config.controller.clone(),
                beneficiary: config.beneficiary.clone(),
                window: config.window.clone(),
                soft_cap: config.caps.soft_cap,
                hard_cap: config.caps.hard_cap,
            },
        );
        logging::info(
            &env,
            "initialize",
            Some(config.controller),
            None,
            ledger_now(&env),
        );
        Ok(())
    }

    /// Move a pending sale to `Active` once its start time has passed.
    /// Anyone may call this; purchases also activate the sale on their own.
    pub fn activate(env: Env) -> Result<SaleState, Error> {
        let mut sale = Sale::load(&env)?;
        controller::activate(&env, &mut sale, ledger_now(&env))
    }

    /// Contribute `native_amount` of the native asset. Returns the token
    /// amount credited.
    pub fn buy(env: Env, contributor: Address, native_amount: i128) -> Result<i128, Error> {
        contributor.require_auth();
        let mut sale = Sale::load(&env)?;
        purchase::buy(&env, &mut sale, &contributor, native_amount, ledger_now(&env))
    }

    /// Reclaim the full native contribution after the sale missed its soft cap.
    pub fn claim_refund(env: Env, contributor: Address) -> Result<i128, Error> {
        contributor.require_auth();
        let mut sale = Sale::load(&env)?;
        vault::claim_refund(&env, &mut sale, &contributor, ledger_now(&env))
    }

    pub fn finalize(env: Env, caller: Address) -> Result<SaleState, Error> {
        let mut sale = Sale::load(&env)?;
        controller::finalize(&env, &mut sale, &caller, ledger_now(&env))
    }

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        let mut sale = Sale::load(&env)?;
        controller::pause(&env, &mut sale, &caller, ledger_now(&env))
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        let mut sale = Sale::load(&env)?;
        controller::unpause(&env, &mut sale, &caller, ledger_now(&env))
    }

    // View functions
    /// The state as of the current ledger: a started `Pending` sale reads as
    /// `Active` even before anything has persisted the activation.
    pub fn state(env: Env) -> Result<SaleState, Error> {
        let sale = Sale::load(&env)?;
        Ok(controller::effective_state(
            sale.state,
            ledger_now(&env),
            &sale.config.window,
        ))
    }

    pub fn total_raised(env: Env) -> Result<i128, Error> {
        Ok(Sale::load(&env)?.ledger.totals().total_raised)
    }

    pub fn total_issued(env: Env) -> Result<i128, Error> {
        Ok(Sale::load(&env)?.ledger.totals().total_issued)
    }

    pub fn remaining_cap(env: Env) -> Result<i128, Error> {
        let sale = Sale::load(&env)?;
        Ok(caps::remaining_cap(sale.ledger.totals(), &sale.config.caps))
    }

    pub fn custody_balance(env: Env) -> Result<i128, Error> {
        Ok(Sale::load(&env)?.ledger.totals().custody)
    }

    pub fn record_of(env: Env, contributor: Address) -> Result<Option<ContributorRecord>, Error> {
        let sale = Sale::load(&env)?;
        Ok(sale.ledger.record_of(&env, &contributor))
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        storage::get_config(&env)
    }

    pub fn sale_info(env: Env) -> Result<SaleSnapshot, Error> {
        let sale = Sale::load(&env)?;
        let totals = sale.ledger.totals();
        Ok(SaleSnapshot {
            state: controller::effective_state(
                sale.state,
                ledger_now(&env),
                &sale.config.window,
            ),
            total_raised: totals.total_raised,
            total_issued: totals.total_issued,
            custody: totals.custody,
            remaining_cap: caps::remaining_cap(totals, &sale.config.caps),
            contributors: totals.contributors,
        })
    }
}
