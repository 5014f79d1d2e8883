//! Integration tests for `cycle_clock` against the real hardware counters.
//!
//! Tolerance bands are deliberately generous: schedulers can delay a woken
//! thread by far more than the slept duration on a loaded machine.

use std::time::Duration;

use cycle_clock::{Clock, TimeUnit};

#[test]
#[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
fn elapsed_is_non_negative_immediately_after_capture() {
    let clock = Clock::new();
    let start = clock.now();

    for unit in [
        TimeUnit::Seconds,
        TimeUnit::Milliseconds,
        TimeUnit::Microseconds,
        TimeUnit::Nanoseconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
    ] {
        assert!(clock.elapsed(start, unit) >= 0);
    }
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
fn sleep_is_reported_within_tolerance() {
    let clock = Clock::new();
    let start = clock.now();

    std::thread::sleep(Duration::from_millis(50));

    let millis = clock.elapsed(start, TimeUnit::Milliseconds);

    assert!(
        millis >= 45,
        "slept 50ms but only {millis}ms were reported"
    );
    assert!(
        millis < 5_000,
        "slept 50ms but {millis}ms were reported; clock is running wild"
    );
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
fn units_agree_on_the_same_interval() {
    let clock = Clock::new();
    let start = clock.now();

    std::thread::sleep(Duration::from_millis(20));

    // The microsecond query happens first, so the millisecond figure may only
    // be equal or larger, and only slightly so.
    let micros = clock.elapsed(start, TimeUnit::Microseconds);
    let millis = clock.elapsed(start, TimeUnit::Milliseconds);

    assert!(millis >= micros / 1000);
    assert!(millis - micros / 1000 < 100);
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
fn consecutive_measurements_do_not_run_backwards() {
    let clock = Clock::new();

    let first = clock.now();
    let second = clock.now();

    assert!(second.instant() >= first.instant());

    // The counter delta between two adjacent reads must be tiny relative to
    // the counter range, even if a rollover happened in between.
    let cycle_delta = second.cycles().wrapping_sub(first.cycles());
    assert!(cycle_delta < u64::MAX / 2);
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
fn benchmark_times_a_sleep() {
    let clock = Clock::new();

    let (output, elapsed) = clock.benchmark(TimeUnit::Milliseconds, || {
        std::thread::sleep(Duration::from_millis(50));
        "finished"
    });

    assert_eq!(output, "finished");
    assert!((45..5_000).contains(&elapsed));
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot read hardware counters")]
fn report_reflects_the_measured_interval() {
    let clock = Clock::new();
    let start = clock.now();

    std::thread::sleep(Duration::from_millis(10));

    let report = clock.report(start, TimeUnit::Microseconds);

    assert!(report.elapsed() >= 9_000);
    assert_eq!(report.unit(), TimeUnit::Microseconds);

    let rendered = report.to_string();
    assert!(rendered.contains("microseconds"));
}
