//! Drillchart - Interactive Chart Viewer with Pie Drill-Down
//!
//! Demo binary hosting one chart binding over a sample dataset.

use anyhow::Result;
use eframe::egui;

use drillchart::DrillchartApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title("Drillchart"),
        ..Default::default()
    };

    eframe::run_native(
        "Drillchart",
        options,
        Box::new(|cc| Ok(Box::new(DrillchartApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run application: {}", e))
}
