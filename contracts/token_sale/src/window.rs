use crate::types::SaleWindow;

/// True iff `start <= now < end`.
pub fn is_open(now: u64, window: &SaleWindow) -> bool {
    window.start <= now && now < window.end
}

/// True iff `now >= end`.
pub fn has_ended(now: u64, window: &SaleWindow) -> bool {
    now >= window.end
}

pub fn has_started(now: u64, window: &SaleWindow) -> bool {
    now >= window.start
}
