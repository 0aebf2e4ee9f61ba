//! Derived hike statistics.

use crate::plan::types::{HikeParameters, HikeStats, Minutes, PlanError};

/// Compute the summary statistics for a parameter set.
///
/// The total rest time is `rest_count × standard_rest + (lunch_rest −
/// standard_rest)`: the plan assumes exactly one of the stops is the lunch
/// stop, replacing a standard rest. When `lunch_rest < standard_rest` the
/// lunch term is negative and the total can drop below zero for very short
/// hikes; that case is logged rather than adjusted.
///
/// No rest is credited for the last partial kilometre, so a hike of
/// exactly one rest interval ends without a final rest.
pub fn compute_stats(params: &HikeParameters) -> Result<HikeStats, PlanError> {
    params.validate()?;

    if params.lunch_rest_min < params.standard_rest_min {
        tracing::warn!(
            lunch_rest_min = params.lunch_rest_min,
            standard_rest_min = params.standard_rest_min,
            "lunch rest shorter than standard rest; total rest may go negative"
        );
    }

    let rest_count = ((params.distance_km - 1.0) / params.rest_interval_km)
        .floor()
        .max(0.0) as u32;

    let total_rest = Minutes(
        rest_count as f64 * params.standard_rest_min as f64
            + (params.lunch_rest_min as f64 - params.standard_rest_min as f64),
    );
    let total_hiking = Minutes::from_hours(params.distance_km / params.average_pace_kmh);
    let arrival_time = params.start_time + total_hiking + total_rest;

    let elapsed_hours = (total_hiking + total_rest).as_hours();
    let effective_pace_kmh = round2(params.distance_km / elapsed_hours);

    tracing::debug!(
        rest_count,
        total_rest_min = total_rest.0,
        total_hiking_min = total_hiking.0,
        arrival = %crate::plan::format::format_time_of_day(arrival_time),
        effective_pace_kmh,
        "computed hike stats"
    );

    Ok(HikeStats {
        rest_count,
        total_rest,
        total_hiking,
        arrival_time,
        effective_pace_kmh,
    })
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
