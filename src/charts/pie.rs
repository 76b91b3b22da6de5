//! Breakdown Pie Module
//! Secondary chart opened on click: each series' value at one index.

use egui::{Color32, Pos2, RichText, Sense, Shape, Stroke, Vec2};

use super::binding::format_tooltip;
use super::series::Series;

const PIE_DIAMETER: f32 = 220.0;
/// Arc step used when tessellating sector fans, in radians.
const ARC_STEP: f32 = 0.1;

/// Result of drawing the breakdown surface for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownAction {
    None,
    /// Secondary pointer action on the pie: detach the window and release
    /// the chart instance.
    Dismiss,
}

/// One pie sector, angles in radians measured clockwise from 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sector {
    pub slice: usize,
    pub start: f32,
    pub end: f32,
}

/// The secondary (pie) chart: a category breakdown across all series at a
/// single clicked index. Holds its own copy of the slice data so it stays
/// valid for as long as the window is open.
#[derive(Debug, Clone)]
pub struct BreakdownChart {
    index: usize,
    title: String,
    labels: Vec<String>,
    values: Vec<f64>,
    colors: Vec<Color32>,
    unit: String,
}

impl BreakdownChart {
    /// Build the breakdown for a zero-based index, reusing the binding's
    /// fixed color assignment. Title reflects the 1-based position.
    pub fn build(
        index: usize,
        series: &[Series],
        colors: &[Color32],
        value_unit: &str,
        axis_unit: &str,
    ) -> Self {
        let labels = series.iter().map(|s| s.label.clone()).collect();
        let values = series
            .iter()
            .map(|s| s.value_at(index).unwrap_or(0.0))
            .collect();

        Self {
            index,
            title: format!("{} for {} {}", value_unit, axis_unit, index + 1),
            labels,
            values,
            colors: colors.to_vec(),
            unit: value_unit.to_string(),
        }
    }

    /// Zero-based index this breakdown was opened for.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Slice values in series order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    /// Draw the pie and legend. Returns `Dismiss` when the user right-clicks
    /// the pie surface; the caller owns the instance and drops it.
    pub fn ui(&self, ui: &mut egui::Ui) -> BreakdownAction {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(PIE_DIAMETER), Sense::click());
        let center = rect.center();
        let radius = rect.width() / 2.0 - 4.0;

        let sectors = sectors(&self.values);
        if sectors.is_empty() {
            ui.painter().text(
                center,
                egui::Align2::CENTER_CENTER,
                "No Data",
                egui::FontId::proportional(14.0),
                ui.visuals().text_color(),
            );
        } else {
            let painter = ui.painter_at(rect);
            for sector in &sectors {
                let color = self.colors[sector.slice % self.colors.len()];
                // Thin triangle fan: each step stays convex even when one
                // slice spans more than half the circle.
                let mut angle = sector.start;
                while angle < sector.end {
                    let next = (angle + ARC_STEP).min(sector.end);
                    painter.add(Shape::convex_polygon(
                        vec![center, arc_point(center, radius, angle), arc_point(center, radius, next)],
                        color,
                        Stroke::NONE,
                    ));
                    angle = next;
                }
            }

            if let Some(pointer) = response.hover_pos() {
                if let Some(slice) = slice_at(&sectors, center, radius, pointer) {
                    response.clone().on_hover_text(format_tooltip(
                        &self.labels[slice],
                        self.values[slice],
                        &self.unit,
                    ));
                }
            }
        }

        ui.add_space(8.0);
        self.draw_legend(ui);

        if response.secondary_clicked() {
            BreakdownAction::Dismiss
        } else {
            BreakdownAction::None
        }
    }

    /// Legend rows: color swatch plus series label.
    fn draw_legend(&self, ui: &mut egui::Ui) {
        for (label, color) in self.labels.iter().zip(self.colors.iter()) {
            ui.horizontal(|ui| {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(rect, 2.0, *color);
                ui.label(RichText::new(label).size(12.0));
            });
        }
    }
}

/// Split the circle into sectors proportional to each value's share of the
/// positive total. Non-positive values get no sector; a non-positive total
/// yields none at all.
pub(crate) fn sectors(values: &[f64]) -> Vec<Sector> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let tau = std::f32::consts::TAU;
    let mut start = 0.0f32;
    let mut out = Vec::new();
    for (slice, &value) in values.iter().enumerate() {
        if value <= 0.0 {
            continue;
        }
        let span = (value / total) as f32 * tau;
        out.push(Sector {
            slice,
            start,
            end: start + span,
        });
        start += span;
    }
    // Close the last sector exactly despite float accumulation.
    if let Some(last) = out.last_mut() {
        last.end = tau;
    }
    out
}

/// Resolve a screen-space pointer position to the sector under it, if the
/// pointer is inside the pie disc.
pub(crate) fn slice_at(
    sectors: &[Sector],
    center: Pos2,
    radius: f32,
    pointer: Pos2,
) -> Option<usize> {
    let offset = pointer - center;
    if offset.length() > radius {
        return None;
    }

    // Clockwise angle from 12 o'clock, matching the sector convention.
    // Screen y grows downward, so atan2 already runs clockwise visually.
    let tau = std::f32::consts::TAU;
    let angle = (offset.y.atan2(offset.x) + std::f32::consts::FRAC_PI_2).rem_euclid(tau);

    sectors
        .iter()
        .find(|s| angle >= s.start && angle < s.end)
        .map(|s| s.slice)
}

fn arc_point(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    // Inverse of the angle convention in `slice_at`.
    let screen_angle = angle - std::f32::consts::FRAC_PI_2;
    center + egui::vec2(screen_angle.cos(), screen_angle.sin()) * radius
}
