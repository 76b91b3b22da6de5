//! Chart Binding Module
//! Wraps a drawing surface and numeric series, renders the primary chart
//! through egui_plot, and spawns the pie breakdown on click.

use egui::{Color32, Pos2, RichText, Sense};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints, Points};
use tracing::error;

use super::colors::sample_default_colors;
use super::pie::{BreakdownAction, BreakdownChart};
use super::series::{ChartKind, Series};

/// Default x-axis unit when the caller does not name one.
const DEFAULT_AXIS_UNIT: &str = "day";
/// Screen-space hit radius for click-to-point resolution, in points.
const HIT_RADIUS: f32 = 6.0;
/// Fixed identifier for the breakdown window, so a new open replaces any
/// existing one instead of stacking a second surface.
const BREAKDOWN_WINDOW_ID: &str = "breakdown_chart";

/// Handle for the drawing surface hosting the primary chart. The id seeds
/// the egui plot state, so one binding maps to one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    id: String,
}

impl Surface {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// One visual track of the primary chart: a series with its fixed color,
/// plotted at 1-based x positions.
#[derive(Debug, Clone)]
struct Track {
    label: String,
    color: Color32,
    values: Vec<f64>,
}

/// The retained primary chart instance. Built once by [`ChartBinding::render`]
/// and redrawn every frame from then on.
#[derive(Debug, Clone)]
struct PrimaryChart {
    tracks: Vec<Track>,
    /// Length of the shared index domain (first series at build time).
    point_count: usize,
}

impl PrimaryChart {
    fn build(series: &[Series], colors: &[Color32]) -> Self {
        let tracks = series
            .iter()
            .zip(colors.iter())
            .map(|(s, &color)| Track {
                label: s.label.clone(),
                color,
                values: s.data.clone(),
            })
            .collect();

        Self {
            tracks,
            point_count: series.first().map(|s| s.data.len()).unwrap_or(0),
        }
    }
}

/// Binds a drawing surface and a list of series to one interactive chart.
///
/// Owns the fixed per-series display colors, the primary chart instance and
/// at most one live breakdown (pie) instance. Constructed once per surface;
/// egui_plot handles all pixel rendering, tooltips and zoom/pan gestures.
pub struct ChartBinding {
    surface: Option<Surface>,
    kind: ChartKind,
    series: Vec<Series>,
    value_unit: String,
    axis_unit: String,
    colors: Vec<Color32>,
    primary: Option<PrimaryChart>,
    breakdown: Option<BreakdownChart>,
    interactive: bool,
}

impl ChartBinding {
    /// Create a binding for `surface`. Display colors are sampled here, one
    /// per series, and never regenerated afterwards. The x-axis unit
    /// defaults to "day"; see [`ChartBinding::with_axis_unit`].
    pub fn new(
        surface: Option<Surface>,
        kind: ChartKind,
        series: Vec<Series>,
        value_unit: impl Into<String>,
    ) -> Self {
        let colors = sample_default_colors(series.len());
        Self {
            surface,
            kind,
            series,
            value_unit: value_unit.into(),
            axis_unit: DEFAULT_AXIS_UNIT.to_string(),
            colors,
            primary: None,
            breakdown: None,
            interactive: false,
        }
    }

    pub fn with_axis_unit(mut self, axis_unit: impl Into<String>) -> Self {
        self.axis_unit = axis_unit.into();
        self
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    pub fn value_unit(&self) -> &str {
        &self.value_unit
    }

    pub fn axis_unit(&self) -> &str {
        &self.axis_unit
    }

    /// The fixed display colors, one per series.
    pub fn colors(&self) -> &[Color32] {
        &self.colors
    }

    /// Whether the primary chart instance has been created.
    pub fn is_rendered(&self) -> bool {
        self.primary.is_some()
    }

    /// The live breakdown instance, if one is open.
    pub fn breakdown(&self) -> Option<&BreakdownChart> {
        self.breakdown.as_ref()
    }

    /// Build the primary chart instance from the current series and attach
    /// click interaction. The instance is created once; calling `render`
    /// again does not recreate it. When the surface is unavailable the
    /// interaction step logs an error and is skipped, nothing else happens.
    pub fn render(&mut self) {
        if self.primary.is_none() {
            self.primary = Some(PrimaryChart::build(&self.series, &self.colors));
        }

        if self.surface.is_some() {
            self.interactive = true;
        } else {
            error!("drawing surface is not available, chart interaction disabled");
            self.interactive = false;
        }
    }

    /// Open the breakdown for a zero-based index. Any existing breakdown
    /// window is replaced, so at most one exists at a time.
    pub fn open_breakdown(&mut self, index: usize) {
        self.breakdown = Some(BreakdownChart::build(
            index,
            &self.series,
            &self.colors,
            &self.value_unit,
            &self.axis_unit,
        ));
    }

    /// Release the breakdown instance and its window.
    pub fn dismiss_breakdown(&mut self) {
        self.breakdown = None;
    }

    /// Draw the retained charts for this frame. Does nothing until
    /// [`ChartBinding::render`] has been called.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let Some(primary) = self.primary.clone() else {
            return;
        };

        if primary.tracks.is_empty() || primary.point_count == 0 {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        }

        self.draw_legend(ui, &primary);

        let plot_id = self
            .surface
            .as_ref()
            .map(|s| s.id().to_string())
            .unwrap_or_else(|| "detached_chart".to_string());

        let unit = self.value_unit.clone();
        let tooltip_tracks: Vec<(String, Vec<f64>)> = primary
            .tracks
            .iter()
            .map(|t| (t.label.clone(), t.values.clone()))
            .collect();
        let point_count = primary.point_count;

        let response = Plot::new(plot_id)
            .x_axis_label(&self.axis_unit)
            .y_axis_label(&self.value_unit)
            .include_x(0.0)
            .include_y(0.0)
            // Wheel/pinch zoom on the value axis, drag pan on the index axis.
            .allow_zoom([false, true])
            .allow_drag([true, false])
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| index_label(mark.value, point_count))
            .label_formatter(move |name, value| {
                tooltip_text(&tooltip_tracks, name, value, &unit)
            })
            .show(ui, |plot_ui| {
                let bar_count = primary.tracks.len();
                for (track_idx, track) in primary.tracks.iter().enumerate() {
                    match self.kind {
                        ChartKind::Line => {
                            let points: Vec<[f64; 2]> = track
                                .values
                                .iter()
                                .enumerate()
                                .map(|(i, &v)| [(i + 1) as f64, v])
                                .collect();
                            plot_ui.line(
                                Line::new(PlotPoints::from(points.clone()))
                                    .color(track.color)
                                    .width(0.5)
                                    .name(&track.label),
                            );
                            plot_ui.points(
                                Points::new(PlotPoints::from(points))
                                    .radius(2.0)
                                    .color(track.color)
                                    .name(&track.label),
                            );
                        }
                        ChartKind::Bar => {
                            let bars: Vec<Bar> = track
                                .values
                                .iter()
                                .enumerate()
                                .map(|(i, &v)| {
                                    Bar::new(bar_x(i, track_idx, bar_count), v)
                                        .width(bar_width(bar_count))
                                })
                                .collect();
                            plot_ui.bar_chart(
                                BarChart::new(bars).color(track.color).name(&track.label),
                            );
                        }
                    }
                }
            });

        if self.interactive && response.response.clicked() {
            if let Some(pointer) = response.response.interact_pointer_pos() {
                let candidates = primary.tracks.iter().flat_map(|track| {
                    track.values.iter().enumerate().map(|(i, &v)| {
                        let screen = response
                            .transform
                            .position_from_point(&PlotPoint::new((i + 1) as f64, v));
                        (screen, i)
                    })
                });
                if let Some(index) = nearest_index(pointer, candidates, HIT_RADIUS) {
                    self.open_breakdown(index);
                }
            }
        }

        self.show_breakdown(ui.ctx());
    }

    /// Legend row above the plot: one swatch per series.
    fn draw_legend(&self, ui: &mut egui::Ui, primary: &PrimaryChart) {
        ui.horizontal(|ui| {
            for track in &primary.tracks {
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                ui.painter().rect_filled(rect, 2.0, track.color);
                ui.label(RichText::new(&track.label).size(12.0));
                ui.add_space(10.0);
            }
        });
        ui.add_space(4.0);
    }

    /// Show the breakdown window when one is open, dropping it on dismiss.
    fn show_breakdown(&mut self, ctx: &egui::Context) {
        let Some(chart) = self.breakdown.as_ref() else {
            return;
        };

        let mut action = BreakdownAction::None;
        egui::Window::new(chart.title())
            .id(egui::Id::new(BREAKDOWN_WINDOW_ID))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                action = chart.ui(ui);
            });

        if action == BreakdownAction::Dismiss {
            self.breakdown = None;
        }
    }
}

/// Tooltip body: `"<label>: <value> <unit>"`. f64 display already drops
/// trailing zeros, so an integral 5.0 reads as "5".
pub fn format_tooltip(label: &str, value: f64, unit: &str) -> String {
    format!("{}: {} {}", label, value, unit)
}

/// Tooltip for the primary chart. The hovered coordinate is snapped to the
/// named track's exact value at the nearest 1-based position, matching what
/// the point markers show.
pub(crate) fn tooltip_text(
    tracks: &[(String, Vec<f64>)],
    name: &str,
    coord: &PlotPoint,
    unit: &str,
) -> String {
    if name.is_empty() {
        return String::new();
    }

    let value = tracks
        .iter()
        .find(|(label, _)| label == name)
        .and_then(|(_, values)| {
            let position = coord.x.round();
            if position >= 1.0 && position <= values.len() as f64 {
                Some(values[position as usize - 1])
            } else {
                None
            }
        })
        .unwrap_or(coord.y);

    format_tooltip(name, value, unit)
}

/// Axis tick label: the 1-based position itself, integer marks only.
pub(crate) fn index_label(mark: f64, point_count: usize) -> String {
    let rounded = mark.round();
    if (mark - rounded).abs() > f64::EPSILON {
        return String::new();
    }
    let position = rounded as i64;
    if position >= 1 && position <= point_count as i64 {
        position.to_string()
    } else {
        String::new()
    }
}

/// Nearest candidate within `max_dist` of the pointer, by screen distance.
pub(crate) fn nearest_index(
    pointer: Pos2,
    candidates: impl IntoIterator<Item = (Pos2, usize)>,
    max_dist: f32,
) -> Option<usize> {
    let mut best: Option<(f32, usize)> = None;
    for (screen, index) in candidates {
        let dist = screen.distance(pointer);
        if dist <= max_dist && best.map(|(d, _)| dist < d).unwrap_or(true) {
            best = Some((dist, index));
        }
    }
    best.map(|(_, index)| index)
}

/// Grouped bar placement around the shared 1-based position.
fn bar_x(point_idx: usize, track_idx: usize, track_count: usize) -> f64 {
    let center = (point_idx + 1) as f64;
    let width = bar_width(track_count);
    let offset = (track_idx as f64 - (track_count as f64 - 1.0) / 2.0) * width;
    center + offset
}

fn bar_width(track_count: usize) -> f64 {
    0.8 / track_count.max(1) as f64
}
