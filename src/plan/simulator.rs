//! Minute-by-minute hike progress simulation.

use crate::plan::types::{
    HikeParameters, HikeStats, Minutes, ProgressSample, ProgressSeries, TimeOfDay,
};

/// First sample of the simulation window.
pub const SIM_WINDOW_START: TimeOfDay = TimeOfDay::from_hm(6, 30);
/// Last sample of the simulation window.
pub const SIM_WINDOW_END: TimeOfDay = TimeOfDay::from_hm(19, 0);
/// Start of the lunch window, inclusive.
pub const LUNCH_START: TimeOfDay = TimeOfDay::from_hm(12, 0);
/// End of the lunch window, exclusive.
pub const LUNCH_END: TimeOfDay = TimeOfDay::from_hm(14, 0);

/// Simulation step.
const TICK: Minutes = Minutes(1.0);
/// Tolerance for matching a distance to a rest checkpoint.
const CHECKPOINT_EPSILON_KM: f64 = 1e-4;

/// Simulate distance travelled over the fixed daily window.
///
/// One sample per minute from 06:30 to 19:00 inclusive. Distance is zero
/// before the start time, advances by one minute of pace per tick while
/// hiking, holds at rest checkpoints for the applicable rest period, and
/// holds at its final value from the arrival time on.
///
/// Rests beginning inside the lunch window (12:00 inclusive to 14:00
/// exclusive) last `lunch_rest_min` instead of `standard_rest_min`.
///
/// If the arrival time falls outside the window, the tail of the hike is
/// simply not modelled: distance stops advancing at the window edge. That
/// truncation is a documented limitation, not an error.
pub fn simulate(params: &HikeParameters, stats: &HikeStats) -> ProgressSeries {
    if stats.arrival_time > SIM_WINDOW_END || params.start_time < SIM_WINDOW_START {
        tracing::warn!(
            start = %crate::plan::format::format_time_of_day(params.start_time),
            arrival = %crate::plan::format::format_time_of_day(stats.arrival_time),
            "hike extends beyond the simulation window; progress will be truncated"
        );
    }

    let tick_distance_km = params.average_pace_kmh / 60.0;
    let mut samples = Vec::with_capacity((SIM_WINDOW_END - SIM_WINDOW_START).0 as usize + 1);
    let mut distance_km = 0.0;
    let mut rest_minutes = 0u32;

    let mut t = SIM_WINDOW_START;
    samples.push(ProgressSample {
        time: t,
        distance_km,
    });

    while t < SIM_WINDOW_END {
        if t >= params.start_time && t < stats.arrival_time {
            let rest_period = rest_period_at(t, params);
            if at_checkpoint(distance_km, params.rest_interval_km)
                && distance_km > 0.0
                && rest_minutes < rest_period
            {
                // Resting: the distance stays pinned at the checkpoint, so
                // this gate re-fires every tick until the rest is over.
                rest_minutes += 1;
            } else if rest_minutes >= rest_period {
                // Rest complete (or none due): back on the trail.
                rest_minutes = 0;
                distance_km += tick_distance_km;
            } else {
                distance_km += tick_distance_km;
            }
        }
        // Before the start time distance stays zero; after arrival it holds.

        t = t + TICK;
        samples.push(ProgressSample {
            time: t,
            distance_km,
        });
    }

    ProgressSeries::new(samples)
}

/// Rest length in minutes for a rest beginning at `t`.
fn rest_period_at(t: TimeOfDay, params: &HikeParameters) -> u32 {
    if t >= LUNCH_START && t < LUNCH_END {
        params.lunch_rest_min
    } else {
        params.standard_rest_min
    }
}

/// Whether a distance sits on a multiple of the rest interval.
fn at_checkpoint(distance_km: f64, rest_interval_km: f64) -> bool {
    let nearest = rest_interval_km * (distance_km / rest_interval_km).round();
    (distance_km - nearest).abs() < CHECKPOINT_EPSILON_KM
}
