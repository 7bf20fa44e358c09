use crate::caps;
use crate::collaborators;
use crate::controller;
use crate::errors::Error;
use crate::events;
use crate::fixed_point;
use crate::logging;
use crate::storage::Sale;
use crate::types::SaleState;
use crate::window;
use soroban_sdk::{Address, Env};

/// Accept `native_amount` from `contributor` and credit the derived tokens.
///
/// Checks, then ledger effects, then the two external calls: the native
/// transfer into custody and, last, the issuer credit.
pub fn buy(
    env: &Env,
    sale: &mut Sale,
    contributor: &Address,
    native_amount: i128,
    now: u64,
) -> Result<i128, Error> {
    let from = controller::catch_up(sale, now);
    if sale.state != SaleState::Active {
        return Err(Error::SaleNotActive);
    }
    if !window::is_open(now, &sale.config.window) {
        return Err(Error::SaleWindowClosed);
    }
    collaborators::require_allowed(env, &sale.config, contributor)?;

    let contributed = sale
        .ledger
        .record_of(env, contributor)
        .map(|record| record.contributed)
        .unwrap_or(0);
    caps::validate_purchase(
        native_amount,
        contributed,
        sale.ledger.totals(),
        &sale.config.caps,
    )?;
    let token_amount = fixed_point::to_tokens(native_amount, &sale.config.rate)?;
    // Too small to buy one token base unit at this rate.
    if token_amount <= 0 {
        return Err(Error::BelowMinimumContribution);
    }

    // effects
    sale.ledger
        .credit(env, contributor, native_amount, token_amount)?;
    sale.save(env);

    // interactions
    collaborators::pull_native(env, &sale.config, contributor, native_amount);
    collaborators::credit_tokens(env, &sale.config, contributor, token_amount)?;

    if from != sale.state {
        events::emit_state_changed(env, from, sale.state, None, now);
    }
    events::emit_purchase(env, contributor.clone(), native_amount, token_amount, now);
    logging::info(env, "buy", Some(contributor.clone()), Some(native_amount), now);
    Ok(token_amount)
}
