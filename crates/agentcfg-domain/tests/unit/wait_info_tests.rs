//! Cache lifetime to wait interval tests

use agentcfg_domain::WaitInfo;
use std::time::Duration;

const FIVE_MINUTES: Duration = Duration::from_secs(300);

#[test]
fn test_missing_zero_and_negative_use_default() {
    assert_eq!(WaitInfo::from_max_age(None).interval, FIVE_MINUTES);
    assert_eq!(WaitInfo::from_max_age(Some(0)).interval, FIVE_MINUTES);
    assert_eq!(WaitInfo::from_max_age(Some(-5)).interval, FIVE_MINUTES);
}

#[test]
fn test_small_positive_is_clamped_to_floor() {
    assert_eq!(
        WaitInfo::from_max_age(Some(2)).interval,
        Duration::from_secs(5)
    );
    assert_eq!(
        WaitInfo::from_max_age(Some(4)).interval,
        Duration::from_secs(5)
    );
    assert!(WaitInfo::from_max_age(Some(2)).reason.contains("minimum"));
}

#[test]
fn test_large_positive_is_used_verbatim() {
    let wait = WaitInfo::from_max_age(Some(30));
    assert_eq!(wait.interval, Duration::from_secs(30));
    assert_eq!(wait.reason, "server-directed cache lifetime");
    assert_eq!(
        WaitInfo::from_max_age(Some(5)).interval,
        Duration::from_secs(5)
    );
}

#[test]
fn test_display_is_human_readable() {
    let wait = WaitInfo::default_wait("test");
    assert_eq!(wait.to_string(), "5m (test)");
}
