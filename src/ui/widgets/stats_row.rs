//! Summary row of the five plan metrics.

use egui::Ui;

use crate::plan::types::HikeStats;
use crate::ui::widgets::metric_display::MetricDisplay;

/// Five-metric summary row: rests, time resting, time hiking, arrival
/// time, and effective pace.
pub struct StatsRow<'a> {
    /// The statistics to display
    stats: &'a HikeStats,
}

impl<'a> StatsRow<'a> {
    /// Create a new stats row.
    pub fn new(stats: &'a HikeStats) -> Self {
        Self { stats }
    }

    /// Render the row.
    pub fn show(self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            MetricDisplay::rest_count(self.stats.rest_count).show(ui);
            ui.separator();
            MetricDisplay::duration(self.stats.total_rest, "Time resting").show(ui);
            ui.separator();
            MetricDisplay::duration(self.stats.total_hiking, "Time hiking").show(ui);
            ui.separator();
            MetricDisplay::time_of_day(self.stats.arrival_time, "Arrival").show(ui);
            ui.separator();
            MetricDisplay::pace(self.stats.effective_pace_kmh, "Effective pace").show(ui);
        });
    }
}
