//! TrailPace - Hiking Pace Calculator
//!
//! Computes a hiking schedule from pace, distance, rest policy, and start
//! time: summary statistics (rests, rest time, hiking time, arrival time,
//! effective pace) plus a minute-by-minute distance series over the day,
//! rendered as a distance-vs-time-of-day chart.

pub mod plan;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use plan::{compute_stats, simulate, HikeParameters, HikePlan, HikeStats, ProgressSeries};
pub use storage::config::AppConfig;
