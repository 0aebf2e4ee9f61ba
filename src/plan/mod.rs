//! Hike planning core: parameters to statistics to progress series.

pub mod format;
pub mod simulator;
pub mod stats;
pub mod types;

pub use simulator::simulate;
pub use stats::compute_stats;
pub use types::{
    snap_rest_interval, HikeParameters, HikeStats, Minutes, PlanError, ProgressSample,
    ProgressSeries, TimeOfDay,
};

/// A fully computed hike plan.
///
/// Each invocation builds a fresh `parameters -> stats -> series` chain;
/// nothing is shared or cached between invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct HikePlan {
    /// The validated input parameters
    pub params: HikeParameters,
    /// Derived summary statistics
    pub stats: HikeStats,
    /// Minute-by-minute progress over the daily window
    pub series: ProgressSeries,
}

impl HikePlan {
    /// Compute statistics and simulate progress for a parameter set.
    pub fn compute(params: HikeParameters) -> Result<Self, PlanError> {
        let stats = compute_stats(&params)?;
        let series = simulate(&params, &stats);
        Ok(Self {
            params,
            stats,
            series,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_runs_full_pipeline() {
        let params =
            HikeParameters::new(5.0, 30.0, 5.0, 15, 40, TimeOfDay::from_hm(7, 40)).unwrap();
        let plan = HikePlan::compute(params).unwrap();

        assert_eq!(plan.stats.rest_count, 5);
        assert!(!plan.series.is_empty());
        assert!((plan.series.final_distance() - plan.params.distance_km).abs() < 1e-6);
    }

    #[test]
    fn test_compute_rejects_invalid_parameters() {
        let params = HikeParameters {
            average_pace_kmh: -5.0,
            distance_km: 30.0,
            rest_interval_km: 5.0,
            standard_rest_min: 15,
            lunch_rest_min: 40,
            start_time: TimeOfDay::from_hm(7, 40),
        };
        assert!(HikePlan::compute(params).is_err());
    }
}
