//! Metric display widget for plan summary values.

use egui::{Align, Layout, RichText, Ui, Vec2};

use crate::plan::format::{format_duration, format_time_of_day};
use crate::plan::types::{Minutes, TimeOfDay};

/// A widget for displaying a single plan metric.
pub struct MetricDisplay<'a> {
    /// The metric value to display
    value: String,
    /// The unit label
    unit: &'a str,
    /// The metric name/label
    label: &'a str,
}

impl<'a> MetricDisplay<'a> {
    /// Create a new metric display.
    pub fn new(value: impl Into<String>, unit: &'a str, label: &'a str) -> Self {
        Self {
            value: value.into(),
            unit,
            label,
        }
    }

    /// Metric display for the rest stop count.
    pub fn rest_count(count: u32) -> Self {
        Self::new(count.to_string(), "", "Rests")
    }

    /// Metric display for a duration.
    pub fn duration(duration: Minutes, label: &'a str) -> Self {
        Self::new(format_duration(duration), "hh:mm", label)
    }

    /// Metric display for a time of day.
    pub fn time_of_day(time: TimeOfDay, label: &'a str) -> Self {
        Self::new(format_time_of_day(time), "hh:mm", label)
    }

    /// Metric display for a pace.
    pub fn pace(pace_kmh: f64, label: &'a str) -> Self {
        Self::new(format!("{:.2}", pace_kmh), "km/h", label)
    }

    /// Render the metric display.
    pub fn show(self, ui: &mut Ui) {
        egui::Frame::new().inner_margin(8.0).show(ui, |ui| {
            ui.set_min_size(Vec2::new(110.0, 70.0));

            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.label(RichText::new(self.label).size(13.0).weak());

                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label(RichText::new(&self.value).size(28.0).strong());
                    if !self.unit.is_empty() {
                        ui.label(RichText::new(self.unit).size(12.0).weak());
                    }
                });
            });
        });
    }
}
