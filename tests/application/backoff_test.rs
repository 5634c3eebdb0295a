use std::time::Duration;

use escriba::application::services::{Backoff, PollPolicy};

#[test]
fn given_default_policy_when_polling_normally_then_delays_follow_growth_curve() {
    let mut backoff = Backoff::new(PollPolicy::default());

    let mut delays = Vec::new();
    while let Some(delay) = backoff.next_delay() {
        delays.push(delay);
        backoff.advance();
    }

    let expected: Vec<Duration> = [10.0, 15.0, 22.5, 33.75, 50.625, 60.0, 60.0]
        .iter()
        .map(|secs| Duration::from_secs_f64(*secs))
        .collect();
    assert_eq!(delays, expected);

    for pair in delays.windows(2) {
        assert!(pair[1] >= pair[0], "delays must be non-decreasing");
    }
}

#[test]
fn given_default_policy_when_advancing_past_cap_then_delay_stays_at_cap() {
    let mut backoff = Backoff::new(PollPolicy::default());

    for _ in 0..20 {
        backoff.advance();
    }

    assert_eq!(backoff.current_delay(), Duration::from_secs(60));
}

#[test]
fn given_throttled_queries_when_backing_off_then_delay_doubles_up_to_throttle_cap() {
    let mut backoff = Backoff::new(PollPolicy::default());

    backoff.throttled();
    assert_eq!(backoff.current_delay(), Duration::from_secs(20));
    backoff.throttled();
    assert_eq!(backoff.current_delay(), Duration::from_secs(40));
    backoff.throttled();
    assert_eq!(backoff.current_delay(), Duration::from_secs(80));
    backoff.throttled();
    assert_eq!(backoff.current_delay(), Duration::from_secs(120));
    backoff.throttled();
    assert_eq!(backoff.current_delay(), Duration::from_secs(120));
}

#[test]
fn given_throttled_backoff_when_asking_for_next_delay_then_loop_continues() {
    let mut backoff = Backoff::new(PollPolicy::default());

    assert_eq!(backoff.next_delay(), Some(Duration::from_secs(10)));
    backoff.throttled();

    assert_eq!(backoff.next_delay(), Some(Duration::from_secs(20)));
}

#[test]
fn given_small_budget_when_next_delay_fits_exactly_then_it_is_still_taken() {
    let policy = PollPolicy {
        initial_delay: Duration::from_secs(10),
        wait_budget: Duration::from_secs(25),
        ..PollPolicy::default()
    };
    let mut backoff = Backoff::new(policy);

    assert_eq!(backoff.next_delay(), Some(Duration::from_secs(10)));
    backoff.advance();
    assert_eq!(backoff.next_delay(), Some(Duration::from_secs(15)));
    backoff.advance();
    assert_eq!(backoff.next_delay(), None);
    assert_eq!(backoff.total_slept(), Duration::from_secs(25));
}

#[test]
fn given_default_policy_when_budget_runs_out_then_total_slept_stays_under_budget() {
    let mut backoff = Backoff::new(PollPolicy::default());

    while backoff.next_delay().is_some() {
        backoff.advance();
    }

    assert!(backoff.total_slept() <= Duration::from_secs(300));
    assert_eq!(backoff.total_slept(), Duration::from_secs_f64(251.875));
}
