extern crate std;

use proptest::prelude::*;

use crate::caps::{remaining_cap, validate_purchase};
use crate::controller::{transition, FinalizeOutlook, Trigger};
use crate::fixed_point::{to_tokens, MAX_RATE_DECIMALS};
use crate::window::{has_ended, is_open};
use crate::{ConversionRate, EarlyClose, Error, SaleCaps, SaleState, SaleTotals, SaleWindow};

fn caps_strategy() -> impl Strategy<Value = SaleCaps> {
    (1i128..1_000, 0i128..10_000, 1i128..100_000).prop_flat_map(|(min, extra, hard)| {
        (0..=hard).prop_map(move |soft| SaleCaps {
            min_contribution: min,
            max_per_contributor: min + extra,
            soft_cap: soft,
            hard_cap: hard,
        })
    })
}

fn state_strategy() -> impl Strategy<Value = SaleState> {
    prop_oneof![
        Just(SaleState::Pending),
        Just(SaleState::Active),
        Just(SaleState::Paused),
        Just(SaleState::Finalized),
        Just(SaleState::Refunding),
    ]
}

fn trigger_strategy() -> impl Strategy<Value = Trigger> {
    let outlook = (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(ended, soft_cap_met, hard_cap_reached, soft_close)| {
            Trigger::Finalize(FinalizeOutlook {
                ended,
                soft_cap_met,
                hard_cap_reached,
                early_close: if soft_close {
                    EarlyClose::SoftCapReached
                } else {
                    EarlyClose::HardCapOnly
                },
            })
        },
    );
    prop_oneof![
        any::<bool>().prop_map(|started| Trigger::Activate { started }),
        Just(Trigger::Pause),
        Just(Trigger::Unpause),
        outlook,
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_window_open_and_ended_are_exclusive(
        start in 0u64..1_000_000,
        len in 1u64..1_000_000,
        now in 0u64..3_000_000,
    ) {
        let window = SaleWindow { start, end: start + len };
        prop_assert!(!(is_open(now, &window) && has_ended(now, &window)));
        prop_assert_eq!(is_open(now, &window), now >= start && now < start + len);
    }

    #[test]
    fn prop_accepted_purchase_never_breaks_caps(
        caps in caps_strategy(),
        amount in -10i128..200_000,
        contributed in 0i128..20_000,
        total_raised in 0i128..100_000,
    ) {
        let totals = SaleTotals { total_raised, ..SaleTotals::default() };
        if validate_purchase(amount, contributed, &totals, &caps).is_ok() {
            prop_assert!(amount >= caps.min_contribution);
            prop_assert!(contributed + amount <= caps.max_per_contributor);
            prop_assert!(total_raised + amount <= caps.hard_cap);
            prop_assert!(amount <= remaining_cap(&totals, &caps));
        }
    }

    #[test]
    fn prop_remaining_cap_is_non_negative(
        caps in caps_strategy(),
        total_raised in 0i128..200_000,
    ) {
        let totals = SaleTotals { total_raised, ..SaleTotals::default() };
        let remaining = remaining_cap(&totals, &caps);
        prop_assert!(remaining >= 0);
        prop_assert!(remaining <= caps.hard_cap);
    }

    #[test]
    fn prop_conversion_is_monotonic(
        a in 0i128..1_000_000_000,
        b in 0i128..1_000_000_000,
        tokens_per_unit in 1i128..1_000_000_000,
        decimals in 0u32..=MAX_RATE_DECIMALS,
    ) {
        let rate = ConversionRate { tokens_per_unit, decimals };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_tokens = to_tokens(lo, &rate).unwrap();
        let hi_tokens = to_tokens(hi, &rate).unwrap();
        prop_assert!(lo_tokens <= hi_tokens);
        prop_assert!(lo_tokens >= 0);
    }

    #[test]
    fn prop_terminal_states_never_leave(
        trigger in trigger_strategy(),
    ) {
        prop_assert_eq!(
            transition(SaleState::Finalized, trigger),
            Err(Error::AlreadyFinalized)
        );
        prop_assert_eq!(
            transition(SaleState::Refunding, trigger),
            Err(Error::AlreadyRefunding)
        );
    }

    #[test]
    fn prop_transitions_follow_table(
        from in state_strategy(),
        trigger in trigger_strategy(),
    ) {
        if let Ok(to) = transition(from, trigger) {
            let allowed = match (from, to) {
                (SaleState::Pending, SaleState::Active)
                | (SaleState::Active, SaleState::Paused)
                | (SaleState::Paused, SaleState::Active)
                | (SaleState::Active, SaleState::Finalized)
                | (SaleState::Active, SaleState::Refunding) => true,
                _ => false,
            };
            prop_assert!(allowed, "unexpected {:?} -> {:?}", from, to);
            if to == SaleState::Refunding {
                let ended_short = matches!(
                    trigger,
                    Trigger::Finalize(FinalizeOutlook { ended: true, soft_cap_met: false, .. })
                );
                prop_assert!(ended_short);
            }
            if to == SaleState::Finalized {
                let soft_met = matches!(
                    trigger,
                    Trigger::Finalize(FinalizeOutlook { soft_cap_met: true, .. })
                );
                prop_assert!(soft_met);
            }
        }
    }
}
