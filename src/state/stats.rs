#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::{OverviewStats, UserStatistics};

/// Statistics page state. The overview and per-user halves load
/// independently; whichever lands is rendered.
#[derive(Clone, Debug, Default)]
pub struct StatsState {
    pub overview: Option<OverviewStats>,
    pub user: Option<UserStatistics>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Width of a proportion bar, in whole percent, clamped to `0..=100`.
pub fn bar_percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let pct = u64::from(part) * 100 / u64::from(whole);
    u32::try_from(pct.min(100)).unwrap_or(100)
}
