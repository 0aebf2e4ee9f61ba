//! Core hike planning types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};
use thiserror::Error;

/// A duration expressed in minutes.
///
/// Durations and instants are distinct types so that formatting and
/// arithmetic are selected statically; see [`TimeOfDay`] for instants.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Minutes(pub f64);

impl Minutes {
    /// Create a duration from a number of hours.
    pub fn from_hours(hours: f64) -> Self {
        Minutes(hours * 60.0)
    }

    /// The duration in fractional hours.
    pub fn as_hours(&self) -> f64 {
        self.0 / 60.0
    }
}

impl Add for Minutes {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Minutes(self.0 + rhs.0)
    }
}

impl Sub for Minutes {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Minutes(self.0 - rhs.0)
    }
}

/// A time of day as minutes since midnight.
///
/// No calendar date is involved anywhere: all schedule arithmetic is
/// offsets from midnight of one unnamed day.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TimeOfDay(pub f64);

impl TimeOfDay {
    /// Create a time of day from wall-clock hour and minute.
    pub const fn from_hm(hour: u32, minute: u32) -> Self {
        TimeOfDay((hour * 60 + minute) as f64)
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> f64 {
        self.0
    }

    /// Wall-clock hour (0-23), wrapping past midnight.
    pub fn hour(&self) -> u32 {
        (self.0.rem_euclid(1440.0) / 60.0) as u32
    }

    /// Wall-clock minute (0-59), wrapping past midnight.
    pub fn minute(&self) -> u32 {
        (self.0.rem_euclid(1440.0) % 60.0) as u32
    }
}

impl Add<Minutes> for TimeOfDay {
    type Output = Self;

    fn add(self, rhs: Minutes) -> Self::Output {
        TimeOfDay(self.0 + rhs.0)
    }
}

impl Sub for TimeOfDay {
    type Output = Minutes;

    fn sub(self, rhs: Self) -> Self::Output {
        Minutes(self.0 - rhs.0)
    }
}

/// Errors related to hike planning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// A parameter violated its constraint
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Immutable input parameters for one hike plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeParameters {
    /// Planned moving pace in km/h
    pub average_pace_kmh: f64,
    /// Total hike distance in km
    pub distance_km: f64,
    /// Distance between mandatory rests in km, snapped to a tick multiple
    pub rest_interval_km: f64,
    /// Standard rest stop length in minutes
    pub standard_rest_min: u32,
    /// Lunch rest stop length in minutes
    pub lunch_rest_min: u32,
    /// Departure time
    pub start_time: TimeOfDay,
}

impl HikeParameters {
    /// Create a validated parameter set.
    ///
    /// The rest interval is snapped to the nearest multiple of the
    /// per-minute pace so that rest checkpoints land exactly on the
    /// one-minute simulation ticks. Fails if pace, distance, or rest
    /// interval is non-positive, or if the snapped interval collapses
    /// to zero.
    pub fn new(
        average_pace_kmh: f64,
        distance_km: f64,
        rest_interval_km: f64,
        standard_rest_min: u32,
        lunch_rest_min: u32,
        start_time: TimeOfDay,
    ) -> Result<Self, PlanError> {
        let params = Self {
            average_pace_kmh,
            distance_km,
            rest_interval_km: snap_rest_interval(average_pace_kmh, rest_interval_km),
            standard_rest_min,
            lunch_rest_min,
            start_time,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check the parameter constraints.
    pub fn validate(&self) -> Result<(), PlanError> {
        if !(self.average_pace_kmh > 0.0) {
            return Err(PlanError::InvalidParameter {
                name: "average_pace_kmh",
                value: self.average_pace_kmh,
            });
        }
        if !(self.distance_km > 0.0) {
            return Err(PlanError::InvalidParameter {
                name: "distance_km",
                value: self.distance_km,
            });
        }
        if !(self.rest_interval_km > 0.0) {
            return Err(PlanError::InvalidParameter {
                name: "rest_interval_km",
                value: self.rest_interval_km,
            });
        }
        Ok(())
    }
}

/// Snap a rest interval to the nearest multiple of the per-minute pace.
///
/// One simulation tick covers `pace / 60` km, so only intervals that are
/// whole multiples of that step can be hit exactly by the simulator.
pub fn snap_rest_interval(average_pace_kmh: f64, rest_interval_km: f64) -> f64 {
    let step_km = average_pace_kmh / 60.0;
    step_km * (rest_interval_km / step_km).round()
}

/// Derived statistics for a hike plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HikeStats {
    /// Number of rest stops, excluding lunch
    pub rest_count: u32,
    /// Total time spent resting, lunch included
    pub total_rest: Minutes,
    /// Total time spent moving
    pub total_hiking: Minutes,
    /// Estimated arrival time
    pub arrival_time: TimeOfDay,
    /// Distance over total elapsed time in km/h, rounded to 2 decimals
    pub effective_pace_kmh: f64,
}

/// One minute-resolution sample of the simulated hike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSample {
    /// Sample time
    pub time: TimeOfDay,
    /// Distance travelled so far in km
    pub distance_km: f64,
}

/// Minute-by-minute distance series over the simulation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSeries {
    samples: Vec<ProgressSample>,
}

impl ProgressSeries {
    /// Wrap an ordered list of samples.
    pub fn new(samples: Vec<ProgressSample>) -> Self {
        Self { samples }
    }

    /// The ordered samples.
    pub fn samples(&self) -> &[ProgressSample] {
        &self.samples
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The distance at the final sample, or zero for an empty series.
    pub fn final_distance(&self) -> f64 {
        self.samples.last().map(|s| s.distance_km).unwrap_or(0.0)
    }
}
