use crate::collaborators;
use crate::errors::Error;
use crate::events;
use crate::logging;
use crate::storage::Sale;
use crate::types::SaleState;
use soroban_sdk::{Address, Env};

/// Return `contributor`'s full native contribution once refunds are enabled.
/// Each record pays out at most once.
pub fn claim_refund(env: &Env, sale: &mut Sale, contributor: &Address, now: u64) -> Result<i128, Error> {
    if sale.state != SaleState::Refunding {
        return Err(Error::RefundNotEligible);
    }
    let record = sale
        .ledger
        .record_of(env, contributor)
        .ok_or(Error::NoContribution)?;

    let amount = sale.ledger.mark_refunded(env, record)?;
    sale.save(env);

    if amount > 0 {
        collaborators::push_native(env, &sale.config, contributor, amount);
    }

    events::emit_refund_claimed(env, contributor.clone(), amount, now);
    logging::info(env, "claim_refund", Some(contributor.clone()), Some(amount), now);
    Ok(amount)
}
