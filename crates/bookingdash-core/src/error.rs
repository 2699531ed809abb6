//! Error types for the booking dashboard

use thiserror::Error;

/// Which chart a series feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Stat icon tag outside the known glyph set
    #[error("Unknown icon tag: {0:?}")]
    UnknownIcon(String),

    /// A dataset's value count differs from its chart's label count
    #[error("{chart} chart dataset {dataset:?} has {values} values for {labels} labels")]
    SeriesLengthMismatch {
        chart: ChartKind,
        dataset: String,
        labels: usize,
        values: usize,
    },

    /// A dataset value is NaN or infinite
    #[error("{chart} chart dataset {dataset:?} has a non-finite value at index {index}")]
    NonFiniteValue {
        chart: ChartKind,
        dataset: String,
        index: usize,
    },

    /// Values are finite but too far apart to fit on one axis
    #[error("{0} chart values span too wide a range to plot")]
    ValueRangeOverflow(ChartKind),

    /// A chart has no datasets to draw
    #[error("{0} chart has no datasets")]
    EmptySeries(ChartKind),

    /// Model file could not be parsed or written
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    /// True for structural defects in the model itself, as opposed to
    /// failures reading it.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DashboardError::UnknownIcon(_)
                | DashboardError::SeriesLengthMismatch { .. }
                | DashboardError::NonFiniteValue { .. }
                | DashboardError::ValueRangeOverflow(_)
                | DashboardError::EmptySeries(_)
        )
    }
}

/// Result type alias using DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
