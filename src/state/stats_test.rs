use super::*;

#[test]
fn stats_state_defaults_empty() {
    let state = StatsState::default();
    assert!(state.overview.is_none());
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn bar_percent_is_proportional() {
    assert_eq!(bar_percent(0, 200), 0);
    assert_eq!(bar_percent(50, 200), 25);
    assert_eq!(bar_percent(200, 200), 100);
}

#[test]
fn bar_percent_handles_empty_whole() {
    assert_eq!(bar_percent(0, 0), 0);
    assert_eq!(bar_percent(5, 0), 0);
}

#[test]
fn bar_percent_clamps_overfull_parts() {
    // Source counts can momentarily exceed the cached total.
    assert_eq!(bar_percent(300, 200), 100);
}
