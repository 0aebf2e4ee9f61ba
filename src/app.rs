//! Main application state and egui integration.

use eframe::egui;

use trailpace::plan::types::TimeOfDay;
use trailpace::plan::{HikeParameters, HikePlan, PlanError};
use trailpace::storage::config::{self, AppConfig, HikeDefaults};
use trailpace::ui::widgets::{ProgressChart, StatsRow};

/// Raw widget state for the six hike inputs.
#[derive(Debug, Clone, PartialEq)]
struct PlanInputs {
    /// Average pace in km/h
    average_pace_kmh: f64,
    /// Total hike distance in km
    distance_km: f64,
    /// Distance between rests in km (unsnapped)
    rest_interval_km: f64,
    /// Standard rest period in minutes
    standard_rest_min: u32,
    /// Lunch rest period in minutes
    lunch_rest_min: u32,
    /// Start hour
    start_hour: u32,
    /// Start minute
    start_minute: u32,
}

impl PlanInputs {
    fn from_defaults(defaults: &HikeDefaults) -> Self {
        Self {
            average_pace_kmh: defaults.average_pace_kmh,
            distance_km: defaults.distance_km,
            rest_interval_km: defaults.rest_interval_km,
            standard_rest_min: defaults.standard_rest_min,
            lunch_rest_min: defaults.lunch_rest_min,
            start_hour: defaults.start_hour,
            start_minute: defaults.start_minute,
        }
    }

    fn to_defaults(&self) -> HikeDefaults {
        HikeDefaults {
            average_pace_kmh: self.average_pace_kmh,
            distance_km: self.distance_km,
            rest_interval_km: self.rest_interval_km,
            standard_rest_min: self.standard_rest_min,
            lunch_rest_min: self.lunch_rest_min,
            start_hour: self.start_hour,
            start_minute: self.start_minute,
        }
    }

    /// Validate and snap into a parameter set.
    fn to_parameters(&self) -> Result<HikeParameters, PlanError> {
        HikeParameters::new(
            self.average_pace_kmh,
            self.distance_km,
            self.rest_interval_km,
            self.standard_rest_min,
            self.lunch_rest_min,
            TimeOfDay::from_hm(self.start_hour, self.start_minute),
        )
    }
}

/// Main application state.
pub struct TrailPaceApp {
    /// Current input widget values
    inputs: PlanInputs,
    /// Last successfully computed plan
    plan: Option<HikePlan>,
    /// Last computation error, if any
    error: Option<String>,
    /// Application configuration
    config: AppConfig,
}

impl TrailPaceApp {
    /// Create a new application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        // Load configuration
        let config = trailpace::storage::config::load_config().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        let mut app = Self {
            inputs: PlanInputs::from_defaults(&config.defaults),
            plan: None,
            error: None,
            config,
        };
        app.recompute();
        app
    }

    /// Recompute the plan from the current inputs.
    ///
    /// Every input change triggers a full fresh computation; nothing is
    /// carried over from the previous plan.
    fn recompute(&mut self) {
        match self.inputs.to_parameters().and_then(HikePlan::compute) {
            Ok(plan) => {
                self.plan = Some(plan);
                self.error = None;
            }
            Err(e) => {
                tracing::warn!("Plan computation failed: {}", e);
                self.plan = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        ui.columns(2, |cols| {
            cols[0].add(
                egui::Slider::new(&mut self.inputs.average_pace_kmh, 0.1..=10.0)
                    .suffix(" km/h")
                    .text("Average pace"),
            );
            cols[0].add(
                egui::Slider::new(&mut self.inputs.distance_km, 0.5..=100.0)
                    .suffix(" km")
                    .text("Hike distance"),
            );
            cols[0].horizontal(|ui| {
                ui.label("Start time");
                ui.add(egui::DragValue::new(&mut self.inputs.start_hour).range(0..=23));
                ui.label(":");
                ui.add(egui::DragValue::new(&mut self.inputs.start_minute).range(0..=59));
            });

            cols[1].add(
                egui::Slider::new(&mut self.inputs.rest_interval_km, 0.1..=20.0)
                    .suffix(" km")
                    .text("Distance between rests"),
            );
            cols[1].add(
                egui::Slider::new(&mut self.inputs.standard_rest_min, 0..=60)
                    .suffix(" min")
                    .text("Standard rest"),
            );
            cols[1].add(
                egui::Slider::new(&mut self.inputs.lunch_rest_min, 0..=60)
                    .suffix(" min")
                    .text("Lunch rest"),
            );
        });
    }

    fn save_defaults(&mut self) {
        self.config.defaults = self.inputs.to_defaults();
        self.config.updated_at = chrono::Utc::now();
        if let Err(e) = config::save_config(&self.config) {
            tracing::warn!("Failed to save config: {}", e);
        } else {
            tracing::info!("Saved current inputs as defaults");
        }
    }
}

impl eframe::App for TrailPaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Hiking pace calculator");
            ui.add_space(8.0);

            let before = self.inputs.clone();
            self.show_inputs(ui);
            if self.inputs != before {
                self.recompute();
            }

            ui.add_space(8.0);

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            if let Some(plan) = &self.plan {
                StatsRow::new(&plan.stats).show(ui);
                ui.separator();
                ProgressChart::new(plan)
                    .height(self.config.ui.chart_height)
                    .show_lunch_window(self.config.ui.show_lunch_window)
                    .show_markers(self.config.ui.show_markers)
                    .show(ui);
            }

            ui.add_space(8.0);
            if ui.button("Save as defaults").clicked() {
                self.save_defaults();
            }
        });
    }
}
