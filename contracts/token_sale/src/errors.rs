use soroban_sdk::{contracterror, symbol_short, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Lifecycle (1–3) ---
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,

    // --- Authorization (4–5) ---
    Unauthorized = 4,
    NotAllowListed = 5,

    // --- Sale state (6–11) ---
    SaleNotActive = 6,
    SaleWindowClosed = 7,
    SaleNotYetEnded = 8,
    AlreadyFinalized = 9,
    AlreadyRefunding = 10,
    InvalidStateTransition = 11,

    // --- Caps and arithmetic (12–15) ---
    BelowMinimumContribution = 12,
    PerContributorCapExceeded = 13,
    HardCapExceeded = 14,
    RateOverflow = 15,

    // --- Refunds (16–18) ---
    RefundNotEligible = 16,
    AlreadyRefunded = 17,
    NoContribution = 18,

    // --- External capabilities (19) ---
    IssuanceFailed = 19,
}

/// Recovery hints surfaced to callers alongside an error.
pub fn get_suggestion(error: Error) -> Symbol {
    match error {
        Error::Unauthorized | Error::NotAllowListed => symbol_short!("CHK_AUTH"),
        Error::SaleNotActive | Error::SaleNotYetEnded => symbol_short!("WAIT"),
        Error::SaleWindowClosed
        | Error::AlreadyFinalized
        | Error::AlreadyRefunding
        | Error::AlreadyRefunded => symbol_short!("NO_RETRY"),
        Error::BelowMinimumContribution => symbol_short!("RAISE"),
        Error::PerContributorCapExceeded | Error::HardCapExceeded | Error::RateOverflow => {
            symbol_short!("REDUCE")
        }
        Error::RefundNotEligible | Error::NoContribution => symbol_short!("CHK_STATE"),
        Error::IssuanceFailed => symbol_short!("RE_TRY"),
        Error::AlreadyInitialized
        | Error::NotInitialized
        | Error::InvalidConfig
        | Error::InvalidStateTransition => symbol_short!("CONTACT"),
    }
}
