//! TrailPace - Hiking Pace Calculator
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TrailPace v{}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([720.0, 540.0])
            .with_title("TrailPace"),
        ..Default::default()
    };

    eframe::run_native(
        "TrailPace",
        options,
        Box::new(|cc| Ok(Box::new(app::TrailPaceApp::new(cc)))),
    )
}
