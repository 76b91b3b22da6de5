//! GUI module - Demo application hosting one chart binding

mod app;

pub use app::DrillchartApp;
