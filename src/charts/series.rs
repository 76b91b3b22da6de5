//! Series Model Module
//! Input data for a chart binding: labeled numeric series over a shared index.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BindingError {
    #[error("Unknown chart kind: {0}")]
    UnknownKind(String),
    #[error("Drawing surface is not available")]
    SurfaceUnavailable,
}

/// One labeled sequence of values, plotted against positions 1..N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub data: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// Value at a zero-based index, if present.
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.data.get(index).copied()
    }
}

/// Primary chart kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Connected line per series with point markers
    Line,
    /// Vertical bars per series
    Bar,
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Line
    }
}

impl FromStr for ChartKind {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            other => Err(BindingError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
        }
    }
}
