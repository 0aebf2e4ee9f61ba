//! Distance-vs-time-of-day chart widget.

use egui::{Color32, Response, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoints, Polygon, VLine};

use crate::plan::format::format_time_of_day;
use crate::plan::simulator::{LUNCH_END, LUNCH_START};
use crate::plan::types::TimeOfDay;
use crate::plan::HikePlan;

/// Hike progress chart widget.
pub struct ProgressChart<'a> {
    /// The computed plan to display
    plan: &'a HikePlan,
    /// Chart height
    height: f32,
    /// Shade the lunch window
    show_lunch_window: bool,
    /// Draw start/arrival marker lines
    show_markers: bool,
}

impl<'a> ProgressChart<'a> {
    /// Create a new progress chart.
    pub fn new(plan: &'a HikePlan) -> Self {
        Self {
            plan,
            height: 360.0,
            show_lunch_window: true,
            show_markers: true,
        }
    }

    /// Set chart height.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Toggle the shaded lunch window.
    pub fn show_lunch_window(mut self, show: bool) -> Self {
        self.show_lunch_window = show;
        self
    }

    /// Toggle the start/arrival marker lines.
    pub fn show_markers(mut self, show: bool) -> Self {
        self.show_markers = show;
        self
    }

    /// Show the chart in the UI.
    pub fn show(self, ui: &mut Ui) -> Response {
        let samples = self.plan.series.samples();

        if samples.is_empty() {
            return ui.label("No progress to display.");
        }

        let coords: Vec<[f64; 2]> = samples
            .iter()
            .map(|s| [s.time.minutes(), s.distance_km])
            .collect();
        let line = Line::new("Distance", PlotPoints::new(coords)).width(3.0);

        let distance_km = self.plan.params.distance_km;

        let plot = Plot::new("hike_progress")
            .height(self.height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show_x(true)
            .show_y(true)
            .x_axis_label("Time of day")
            .y_axis_label("Distance travelled [km]")
            .include_y(0.0)
            .include_y(distance_km)
            .x_axis_formatter(|mark, _range| format_time_axis(mark.value))
            .label_formatter(|name, value| {
                let at = format!(
                    "{}: {:.2} km",
                    format_time_axis(value.x),
                    value.y.max(0.0)
                );
                if name.is_empty() {
                    at
                } else {
                    format!("{}\n{}", name, at)
                }
            });

        plot.show(ui, |plot_ui| {
            if self.show_lunch_window {
                let rect = vec![
                    [LUNCH_START.minutes(), 0.0],
                    [LUNCH_END.minutes(), 0.0],
                    [LUNCH_END.minutes(), distance_km],
                    [LUNCH_START.minutes(), distance_km],
                ];
                plot_ui.polygon(
                    Polygon::new("Lunch window", PlotPoints::new(rect))
                        .fill_color(Color32::from_rgba_unmultiplied(120, 160, 255, 40))
                        .stroke(egui::Stroke::NONE),
                );
            }

            plot_ui.line(line);

            if self.show_markers {
                plot_ui.vline(
                    VLine::new("Start", self.plan.params.start_time.minutes())
                        .color(Color32::RED)
                        .style(LineStyle::Dashed { length: 8.0 })
                        .width(2.0),
                );
                plot_ui.vline(
                    VLine::new("Arrival", self.plan.stats.arrival_time.minutes())
                        .color(Color32::RED)
                        .style(LineStyle::Dashed { length: 8.0 })
                        .width(2.0),
                );
            }
        })
        .response
    }
}

/// Format a minutes-since-midnight axis value as wall-clock time.
fn format_time_axis(minutes: f64) -> String {
    format_time_of_day(TimeOfDay(minutes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time_axis() {
        assert_eq!(format_time_axis(390.0), "06:30");
        assert_eq!(format_time_axis(460.0), "07:40");
        assert_eq!(format_time_axis(1140.0), "19:00");
    }
}
