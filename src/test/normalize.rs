use crate::Error;
use crate::series::{DEFAULT_MAX_GAP_MS, normalize};

#[test]
fn gap_under_threshold_keeps_points_connected() {
    // Arrivals at 10:00:00.000 and 10:00:05.000 — a 5000 ms gap.
    let out = normalize(&[(0.0, 100), (5.0, 50)], None, DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(out.times_ms, vec![0.0, 5000.0]);
    assert_eq!(out.delays_ms, vec![100.0, 50.0]);
    assert_eq!(out.min_arrival_ms, 0.0);
}

#[test]
fn gap_over_threshold_inserts_a_sentinel_pair() {
    // Second arrival at 10:00:15.000 — a 15000 ms gap, over the 10000 ms default.
    let out = normalize(&[(0.0, 100), (15.0, 50)], None, DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(out.times_ms.len(), 4);
    assert_eq!(out.times_ms[0], 0.0);
    assert!(out.times_ms[1].is_nan());
    assert!(out.times_ms[2].is_nan());
    assert_eq!(out.times_ms[3], 15000.0);
    assert_eq!(out.delays_ms[0], 100.0);
    assert!(out.delays_ms[1].is_nan());
    assert!(out.delays_ms[2].is_nan());
    assert_eq!(out.delays_ms[3], 50.0);
}

#[test]
fn minimum_shifted_arrival_is_zero_without_override() {
    let out = normalize(
        &[(7.5, 1), (3.25, 2), (9.0, 3)],
        None,
        DEFAULT_MAX_GAP_MS,
    )
    .unwrap();
    assert_eq!(out.min_arrival_ms, 3250.0);
    assert_eq!(out.times_ms, vec![0.0, 4250.0, 5750.0]);
    assert_eq!(out.delays_ms, vec![2.0, 1.0, 3.0]);
}

#[test]
fn override_shifts_a_companion_series_by_the_shared_origin() {
    let out = normalize(&[(2.0, 10), (3.0, 20)], Some(1000.0), DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(out.min_arrival_ms, 1000.0);
    assert_eq!(out.times_ms, vec![1000.0, 2000.0]);
}

#[test]
fn single_event_series_shifts_to_zero_with_no_sentinels() {
    let out = normalize(&[(42.0, 7)], None, DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(out.times_ms, vec![0.0]);
    assert_eq!(out.delays_ms, vec![7.0]);
    assert_eq!(out.points(), 1);
}

#[test]
fn sort_is_stable_for_tied_arrivals() {
    let out = normalize(
        &[(5.0, 1), (1.0, 9), (5.0, 2), (5.0, 3)],
        None,
        DEFAULT_MAX_GAP_MS,
    )
    .unwrap();
    assert_eq!(out.delays_ms, vec![9.0, 1.0, 2.0, 3.0]);
}

#[test]
fn empty_input_is_an_error() {
    assert!(matches!(
        normalize(&[], None, DEFAULT_MAX_GAP_MS),
        Err(Error::EmptySeries)
    ));
}

#[test]
fn renormalizing_a_normalized_series_is_a_no_op() {
    let first = normalize(&[(3.0, 10), (4.0, 20), (6.0, 30)], None, DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(first.min_arrival_ms, 3000.0);

    // Feed the normalized series back in (as seconds) — already sorted,
    // min zero, no gaps — and expect the identical series out.
    let pairs: Vec<(f64, i64)> = first
        .times_ms
        .iter()
        .zip(&first.delays_ms)
        .map(|(&t, &d)| (t / 1000.0, d as i64))
        .collect();
    let second = normalize(&pairs, None, DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(second.times_ms, first.times_ms);
    assert_eq!(second.delays_ms, first.delays_ms);
    assert_eq!(second.min_arrival_ms, 0.0);
}

#[test]
fn segments_split_at_sentinels() {
    let out = normalize(
        &[(0.0, 1), (1.0, 2), (20.0, 3), (21.0, 4)],
        None,
        DEFAULT_MAX_GAP_MS,
    )
    .unwrap();
    let segments = out.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0], vec![(0.0, 1.0), (1000.0, 2.0)]);
    assert_eq!(segments[1], vec![(20000.0, 3.0), (21000.0, 4.0)]);
    assert_eq!(out.points(), 4);
}

#[test]
fn consecutive_gaps_each_get_their_own_sentinel_pair() {
    let out = normalize(&[(0.0, 1), (20.0, 2), (40.0, 3)], None, DEFAULT_MAX_GAP_MS).unwrap();
    assert_eq!(out.times_ms.len(), 7);
    assert_eq!(out.segments().len(), 3);
}
