//! Sale lifecycle.
//!
//! ```text
//! Pending --activate (now >= start)--> Active <--pause/unpause--> Paused
//! Active --finalize--> Finalized   (ended or early close, soft cap met)
//! Active --finalize--> Refunding   (ended, soft cap missed)
//! ```
//!
//! `transition` is the only place a new `SaleState` is decided; the
//! operations below apply its answer and perform the side effects.

use crate::caps;
use crate::collaborators;
use crate::errors::Error;
use crate::events;
use crate::logging;
use crate::storage::Sale;
use crate::types::{EarlyClose, SaleState, SaleWindow};
use crate::window;
use soroban_sdk::{Address, Env};

/// Facts about the sale that decide where a finalize lands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FinalizeOutlook {
    pub ended: bool,
    pub soft_cap_met: bool,
    pub hard_cap_reached: bool,
    pub early_close: EarlyClose,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Activate { started: bool },
    Pause,
    Unpause,
    Finalize(FinalizeOutlook),
}

pub fn transition(from: SaleState, trigger: Trigger) -> Result<SaleState, Error> {
    match (from, trigger) {
        (SaleState::Finalized, _) => Err(Error::AlreadyFinalized),
        (SaleState::Refunding, _) => Err(Error::AlreadyRefunding),
        (SaleState::Pending, Trigger::Activate { started: true }) => Ok(SaleState::Active),
        (SaleState::Pending, _) => Err(Error::SaleNotActive),
        (SaleState::Active, Trigger::Pause) => Ok(SaleState::Paused),
        (SaleState::Paused, Trigger::Unpause) => Ok(SaleState::Active),
        (SaleState::Paused, Trigger::Finalize(_)) => Err(Error::SaleNotActive),
        (SaleState::Active, Trigger::Finalize(outlook)) => finalize_target(outlook),
        _ => Err(Error::InvalidStateTransition),
    }
}

fn finalize_target(outlook: FinalizeOutlook) -> Result<SaleState, Error> {
    if outlook.ended {
        return Ok(if outlook.soft_cap_met {
            SaleState::Finalized
        } else {
            SaleState::Refunding
        });
    }

    let early_close_allowed = match outlook.early_close {
        EarlyClose::HardCapOnly => outlook.hard_cap_reached,
        EarlyClose::SoftCapReached => true,
    };
    if outlook.soft_cap_met && early_close_allowed {
        Ok(SaleState::Finalized)
    } else {
        Err(Error::SaleNotYetEnded)
    }
}

/// The state a purchase at `now` sees: a pending sale whose start has
/// passed is treated as active.
pub fn effective_state(state: SaleState, now: u64, window: &SaleWindow) -> SaleState {
    match state {
        SaleState::Pending => transition(
            state,
            Trigger::Activate {
                started: window::has_started(now, window),
            },
        )
        .unwrap_or(state),
        _ => state,
    }
}

/// Apply a due activation to the in-memory `sale`. Returns the state it held
/// before; callers persist and announce the change with their own writes.
pub fn catch_up(sale: &mut Sale, now: u64) -> SaleState {
    let stored = sale.state;
    sale.state = effective_state(stored, now, &sale.config.window);
    stored
}

fn announce_activation(env: &Env, stored: SaleState, current: SaleState, now: u64) {
    if stored != current {
        events::emit_state_changed(env, stored, current, None, now);
    }
}

pub fn outlook(sale: &Sale, now: u64) -> FinalizeOutlook {
    let totals = sale.ledger.totals();
    FinalizeOutlook {
        ended: window::has_ended(now, &sale.config.window),
        soft_cap_met: caps::soft_cap_met(totals, &sale.config.caps),
        hard_cap_reached: caps::hard_cap_reached(totals, &sale.config.caps),
        early_close: sale.config.early_close,
    }
}

pub fn activate(env: &Env, sale: &mut Sale, now: u64) -> Result<SaleState, Error> {
    let from = sale.state;
    let to = transition(
        from,
        Trigger::Activate {
            started: window::has_started(now, &sale.config.window),
        },
    )?;

    sale.state = to;
    sale.save(env);

    events::emit_state_changed(env, from, to, None, now);
    logging::info(env, "activate", None, None, now);
    Ok(to)
}

pub fn pause(env: &Env, sale: &mut Sale, caller: &Address, now: u64) -> Result<(), Error> {
    collaborators::require_controller(env, &sale.config, caller)?;
    let stored = catch_up(sale, now);
    let from = sale.state;
    let to = transition(from, Trigger::Pause)?;

    sale.state = to;
    sale.save(env);

    announce_activation(env, stored, from, now);
    events::emit_state_changed(env, from, to, Some(caller.clone()), now);
    logging::info(env, "pause", Some(caller.clone()), None, now);
    Ok(())
}

pub fn unpause(env: &Env, sale: &mut Sale, caller: &Address, now: u64) -> Result<(), Error> {
    collaborators::require_controller(env, &sale.config, caller)?;
    let from = sale.state;
    let to = transition(from, Trigger::Unpause)?;

    sale.state = to;
    sale.save(env);

    events::emit_state_changed(env, from, to, Some(caller.clone()), now);
    logging::info(env, "unpause", Some(caller.clone()), None, now);
    Ok(())
}

/// Resolve the sale. On success the whole custody balance goes to the
/// beneficiary; otherwise custody stays locked for refunds.
pub fn finalize(env: &Env, sale: &mut Sale, caller: &Address, now: u64) -> Result<SaleState, Error> {
    collaborators::require_controller(env, &sale.config, caller)?;
    let stored = catch_up(sale, now);
    let to = transition(sale.state, Trigger::Finalize(outlook(sale, now)))?;
    announce_activation(env, stored, sale.state, now);
    sale.state = to;

    if to == SaleState::Finalized {
        let released = sale.ledger.release_custody();
        sale.save(env);

        let beneficiary = sale.config.beneficiary.clone();
        if released > 0 {
            collaborators::push_native(env, &sale.config, &beneficiary, released);
        }
        events::emit_finalized(env, beneficiary, released, now);
        logging::info(env, "finalize", Some(caller.clone()), Some(released), now);
    } else {
        sale.save(env);

        let totals = sale.ledger.totals();
        events::emit_refund_enabled(env, totals.total_raised, sale.config.caps.soft_cap, now);
        logging::warn(
            env,
            "finalize",
            Some(caller.clone()),
            Some(totals.total_raised),
            now,
        );
    }
    Ok(to)
}
