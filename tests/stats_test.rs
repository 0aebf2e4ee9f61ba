//! Tests for hike statistics calculation.

use trailpace::plan::format::{format_duration, format_time_of_day};
use trailpace::plan::types::{HikeParameters, Minutes, PlanError, TimeOfDay};
use trailpace::plan::{compute_stats, snap_rest_interval};

fn standard_day() -> HikeParameters {
    HikeParameters::new(5.0, 30.0, 5.0, 15, 40, TimeOfDay::from_hm(7, 40)).unwrap()
}

#[test]
fn test_standard_day_summary() {
    let params = standard_day();
    let stats = compute_stats(&params).unwrap();

    assert_eq!(stats.rest_count, 5);
    assert_eq!(format_duration(stats.total_rest), "01:40");
    assert_eq!(format_duration(stats.total_hiking), "06:00");
    assert_eq!(format_time_of_day(stats.arrival_time), "15:20");
    assert_eq!(stats.effective_pace_kmh, 3.91);
}

#[test]
fn test_arrival_is_exactly_start_plus_durations() {
    let params = standard_day();
    let stats = compute_stats(&params).unwrap();
    assert_eq!(
        stats.arrival_time,
        params.start_time + stats.total_hiking + stats.total_rest
    );
}

#[test]
fn test_effective_pace_times_elapsed_recovers_distance() {
    let params = standard_day();
    let stats = compute_stats(&params).unwrap();
    let elapsed_hours = (stats.total_hiking + stats.total_rest).as_hours();
    assert!((stats.effective_pace_kmh * elapsed_hours - params.distance_km).abs() < 0.05);
}

#[test]
fn test_one_km_hike_has_no_rests() {
    let params = HikeParameters::new(5.0, 1.0, 5.0, 15, 40, TimeOfDay::from_hm(7, 40)).unwrap();
    let stats = compute_stats(&params).unwrap();
    assert_eq!(stats.rest_count, 0);
}

#[test]
fn test_rest_interval_snaps_to_pace_tick() {
    // At 4.4 km/h one tick covers 4.4/60 km; the nearest multiple to
    // 5.0 km is 68 ticks.
    let snapped = snap_rest_interval(4.4, 5.0);
    assert!((snapped - 68.0 * 4.4 / 60.0).abs() < 1e-12);

    let params = HikeParameters::new(4.4, 32.0, 5.0, 15, 60, TimeOfDay::from_hm(7, 40)).unwrap();
    assert!((params.rest_interval_km - snapped).abs() < 1e-12);
}

#[test]
fn test_rest_count_uses_snapped_interval() {
    let params = HikeParameters::new(4.4, 32.0, 5.0, 15, 60, TimeOfDay::from_hm(7, 40)).unwrap();
    let stats = compute_stats(&params).unwrap();
    let expected = ((32.0 - 1.0) / params.rest_interval_km).floor() as u32;
    assert_eq!(stats.rest_count, expected);
}

#[test]
fn test_invalid_parameters_are_rejected() {
    let start = TimeOfDay::from_hm(7, 40);
    for (pace, distance, interval) in [
        (0.0, 30.0, 5.0),
        (-2.0, 30.0, 5.0),
        (5.0, 0.0, 5.0),
        (5.0, 30.0, -5.0),
    ] {
        let result = HikeParameters::new(pace, distance, interval, 15, 40, start);
        assert!(matches!(result, Err(PlanError::InvalidParameter { .. })));
    }
}

#[test]
fn test_negative_total_rest_is_preserved() {
    // Short hike, lunch shorter than standard: the policy formula is kept
    // as-is and goes negative rather than being silently clamped.
    let params = HikeParameters::new(5.0, 0.5, 5.0, 20, 5, TimeOfDay::from_hm(7, 40)).unwrap();
    let stats = compute_stats(&params).unwrap();
    assert_eq!(stats.total_rest, Minutes(-15.0));
    assert_eq!(
        stats.arrival_time,
        params.start_time + stats.total_hiking + stats.total_rest
    );
}
