//! UI widgets for reusable components.

pub mod metric_display;
pub mod progress_chart;
pub mod stats_row;

pub use metric_display::MetricDisplay;
pub use progress_chart::ProgressChart;
pub use stats_row::StatsRow;
