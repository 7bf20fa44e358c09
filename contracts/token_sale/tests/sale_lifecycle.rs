#![cfg(test)]

mod common;

use common::setup_sale;
use soroban_sdk::Env;
use token_sale::{Error, SaleState};

#[test]
fn test_successful_sale_pays_beneficiary() {
    let env = Env::default();
    let t = setup_sale(&env, None);
    let alice = t.contributor(2_000);
    let bob = t.contributor(2_000);

    t.at(1_000);
    assert_eq!(t.sale.buy(&alice, &400), 1_000);
    assert_eq!(t.sale.buy(&bob, &700), 1_750);
    assert_eq!(t.sale.buy(&alice, &11), 27);

    assert_eq!(t.token.balance(&alice), 1_027);
    assert_eq!(t.token.balance(&bob), 1_750);
    assert_eq!(t.token.total_supply(), t.sale.total_issued());

    t.at(2_000);
    assert_eq!(t.sale.finalize(&t.controller), SaleState::Finalized);
    assert_eq!(t.native.balance(&t.beneficiary), 1_111);
    assert_eq!(t.native.balance(&t.sale_id), 0);

    // Tokens stay with contributors after the sale closes.
    assert_eq!(t.token.balance(&alice), 1_027);
    assert_eq!(
        t.sale.try_claim_refund(&alice),
        Err(Ok(Error::RefundNotEligible))
    );
}

#[test]
fn test_failed_sale_refunds_every_contributor() {
    let env = Env::default();
    let t = setup_sale(&env, None);
    let alice = t.contributor(2_000);
    let bob = t.contributor(2_000);

    t.at(1_500);
    t.sale.buy(&alice, &300);
    t.sale.buy(&bob, &200);

    t.at(2_500);
    assert_eq!(t.sale.finalize(&t.controller), SaleState::Refunding);

    assert_eq!(t.sale.claim_refund(&alice), 300);
    assert_eq!(t.sale.claim_refund(&bob), 200);
    assert_eq!(t.native.balance(&alice), 2_000);
    assert_eq!(t.native.balance(&bob), 2_000);
    assert_eq!(t.native.balance(&t.sale_id), 0);
    assert_eq!(t.sale.custody_balance(), 0);
    assert_eq!(t.native.balance(&t.beneficiary), 0);

    let info = t.sale.sale_info();
    assert_eq!(info.state, SaleState::Refunding);
    assert_eq!(info.total_raised, 500);
    assert_eq!(info.contributors, 2);
}

#[test]
fn test_token_supply_cap_blocks_purchase() {
    let env = Env::default();
    let t = setup_sale(&env, Some(1_000));
    let alice = t.contributor(2_000);

    t.at(1_200);
    assert_eq!(t.sale.buy(&alice, &400), 1_000);
    assert_eq!(t.sale.try_buy(&alice, &10), Err(Ok(Error::IssuanceFailed)));

    assert_eq!(t.sale.total_raised(), 400);
    assert_eq!(t.native.balance(&alice), 1_600);
    assert_eq!(t.sale.record_of(&alice).unwrap().contributed, 400);
}
