//! Value Semantics Integration Tests
//!
//! A constructed Period is unaffected by later changes to the instants it
//! was built from or handed out, and reads the same from any thread.

use period_core::{Instant, Period};

const NOW: i64 = 1_700_000_000_000;
const DELTA: i64 = 60 * 60 * 1000;

fn assert_forward_hour(period: &Period) {
    assert_eq!(period.length(), DELTA);
    assert!(!period.is_backward());
    for t in [NOW, NOW + 1, NOW + DELTA - 1] {
        assert!(period.contains(Instant::from_millis(t)).unwrap());
    }
    for t in [NOW - 1, NOW + DELTA, NOW + DELTA + 1] {
        assert!(!period.contains(Instant::from_millis(t)).unwrap());
    }
}

#[test]
fn test_mutating_inputs_after_construction() {
    let mut start = Instant::from_millis(NOW);
    let mut end = Instant::from_millis(NOW + DELTA);
    let period = Period::new(start, end).unwrap();

    start.set_millis(NOW - DELTA);
    end.set_millis(NOW + DELTA * 2);

    assert_eq!(start.as_millis(), NOW - DELTA);
    assert_eq!(end.as_millis(), NOW + DELTA * 2);
    assert_forward_hour(&period);
}

#[test]
fn test_mutating_returned_instants() {
    let period = Period::new(Instant::from_millis(NOW), Instant::from_millis(NOW + DELTA)).unwrap();

    let mut new_start = period.start();
    new_start -= DELTA;
    let mut new_end = period.end();
    new_end += DELTA;

    assert_eq!(new_end - new_start, 3 * DELTA);
    assert_eq!(period.start(), Instant::from_millis(NOW));
    assert_eq!(period.end(), Instant::from_millis(NOW + DELTA));
    assert_forward_hour(&period);
}

#[test]
fn test_repeated_reads_are_stable() {
    for end in [NOW + DELTA, NOW - DELTA, NOW] {
        let period = Period::new(Instant::from_millis(NOW), Instant::from_millis(end)).unwrap();
        let first = (period.start(), period.end(), period.length(), period.is_backward());

        for _ in 0..10 {
            let again = (period.start(), period.end(), period.length(), period.is_backward());
            assert_eq!(again, first);
        }
    }
}

#[test]
fn test_copies_compare_equal() {
    let period = Period::new(Instant::from_millis(NOW), Instant::from_millis(NOW - DELTA)).unwrap();
    let copy = period;

    assert_eq!(copy, period);
    assert_eq!(copy.length(), -DELTA);
}

#[test]
fn test_concurrent_reads() {
    let period = Period::new(Instant::from_millis(NOW), Instant::from_millis(NOW + DELTA)).unwrap();

    std::thread::scope(|scope| {
        for offset in 0..8 {
            let period = &period;
            scope.spawn(move || {
                for _ in 0..1_000 {
                    assert_eq!(period.length(), DELTA);
                    assert!(period.contains(Instant::from_millis(NOW + offset)).unwrap());
                }
            });
        }
    });

    assert_forward_hour(&period);
}
