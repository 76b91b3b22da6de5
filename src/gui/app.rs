//! Drillchart Demo Application
//! Side panel with chart settings, central panel hosting the binding.

use egui::{Color32, ComboBox, RichText, SidePanel};
use tracing::warn;

use crate::charts::{ChartBinding, ChartKind, Series, Surface};

/// Sample dataset shown by the demo binary: daily energy use per appliance.
const SAMPLE_DATA: &str = include_str!("sample_data.json");

const SURFACE_ID: &str = "usage_chart";
const VALUE_UNIT: &str = "kWh";

/// Main demo window: one surface, one chart binding.
pub struct DrillchartApp {
    series: Vec<Series>,
    kind: ChartKind,
    binding: ChartBinding,
}

impl Default for DrillchartApp {
    fn default() -> Self {
        let series = load_sample_series();
        let kind = ChartKind::Line;
        Self {
            binding: make_binding(kind, series.clone()),
            series,
            kind,
        }
    }
}

impl DrillchartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// A binding is constructed once per surface, so switching the chart
    /// kind builds a fresh one (with freshly sampled colors).
    fn set_kind(&mut self, kind: ChartKind) {
        if kind != self.kind {
            self.kind = kind;
            self.binding = make_binding(kind, self.series.clone());
        }
    }
}

impl eframe::App for DrillchartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut selected = self.kind;

        SidePanel::left("settings_panel")
            .min_width(220.0)
            .max_width(260.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(5.0);
                    ui.label(
                        RichText::new("📊 Drillchart")
                            .size(22.0)
                            .color(Color32::from_rgb(100, 149, 237)),
                    );
                });
                ui.add_space(10.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(RichText::new("⚙️ Chart Kind").size(14.0).strong());
                ui.add_space(5.0);
                ComboBox::from_id_salt("chart_kind")
                    .width(150.0)
                    .selected_text(selected.to_string())
                    .show_ui(ui, |ui| {
                        for kind in [ChartKind::Line, ChartKind::Bar] {
                            ui.selectable_value(&mut selected, kind, kind.to_string());
                        }
                    });

                ui.add_space(15.0);
                ui.separator();
                ui.add_space(5.0);

                ui.label(
                    RichText::new(format!(
                        "{} series, {} per {}",
                        self.series.len(),
                        VALUE_UNIT,
                        self.binding.axis_unit()
                    ))
                    .size(11.0)
                    .color(Color32::GRAY),
                );
                ui.label(
                    RichText::new("Click a point to open the breakdown,\nright-click the pie to close it.")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });

        self.set_kind(selected);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.binding.ui(ui);
        });
    }
}

fn make_binding(kind: ChartKind, series: Vec<Series>) -> ChartBinding {
    let mut binding = ChartBinding::new(Some(Surface::new(SURFACE_ID)), kind, series, VALUE_UNIT);
    binding.render();
    binding
}

fn load_sample_series() -> Vec<Series> {
    match serde_json::from_str(SAMPLE_DATA) {
        Ok(series) => series,
        Err(e) => {
            warn!("failed to parse embedded sample data: {}", e);
            Vec::new()
        }
    }
}
