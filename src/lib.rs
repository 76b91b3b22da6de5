//! # Drillchart
//!
//! `drillchart` binds numeric series to an interactive egui_plot chart and
//! wires a click-to-drill-down pie breakdown on top of it.
//!
//! The core type is [`ChartBinding`]: it owns the series, a fixed set of
//! display colors (one per series, sampled once at construction), the primary
//! line or bar chart, and at most one live breakdown window. All pixel
//! rendering, tooltip layout and zoom/pan gestures are delegated to
//! `egui_plot`; the breakdown pie is painted with the egui painter inside a
//! fixed-id window.
//!
//! ## Example
//!
//! ```no_run
//! use drillchart::{ChartBinding, ChartKind, Series, Surface};
//!
//! let series = vec![
//!     Series::new("Product A", vec![3.0, 5.0]),
//!     Series::new("Product B", vec![4.0, 2.0]),
//! ];
//! let mut binding =
//!     ChartBinding::new(Some(Surface::new("usage_chart")), ChartKind::Line, series, "kWh");
//! binding.render();
//! // each frame: binding.ui(ui) inside an egui panel
//! ```

pub mod charts;
pub mod gui;

// Re-export main types for convenience
pub use charts::{
    BindingError, BreakdownChart, ChartBinding, ChartKind, Series, Surface, DEFAULT_CHANNEL_RANGE,
};
pub use gui::DrillchartApp;
