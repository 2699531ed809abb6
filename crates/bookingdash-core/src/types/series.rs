//! Label/value series feeding the charts

use serde::{Deserialize, Serialize};

use crate::error::{ChartKind, DashboardError, DashboardResult};

/// One named sequence of values drawn in a single color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Legend label
    pub label: String,
    /// One value per chart label
    pub data: Vec<f64>,
    /// CSS color for the line stroke or bar fill
    pub color: String,
}

impl Dataset {
    pub fn new(label: impl Into<String>, data: Vec<f64>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data,
            color: color.into(),
        }
    }
}

/// Category labels plus the datasets plotted against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

/// Series with ordered labels, drawn as a line chart.
pub type TimeSeries = SeriesData;

/// Series with categorical labels, drawn as a bar chart.
pub type CategorySeries = SeriesData;

impl SeriesData {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>, datasets: Vec<Dataset>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            datasets,
        }
    }

    /// Require at least one dataset, and exactly one finite value per label
    /// in each.
    pub fn validate(&self, chart: ChartKind) -> DashboardResult<()> {
        if self.datasets.is_empty() {
            return Err(DashboardError::EmptySeries(chart));
        }
        for dataset in &self.datasets {
            if dataset.data.len() != self.labels.len() {
                return Err(DashboardError::SeriesLengthMismatch {
                    chart,
                    dataset: dataset.label.clone(),
                    labels: self.labels.len(),
                    values: dataset.data.len(),
                });
            }
            if let Some(index) = dataset.data.iter().position(|v| !v.is_finite()) {
                return Err(DashboardError::NonFiniteValue {
                    chart,
                    dataset: dataset.label.clone(),
                    index,
                });
            }
        }
        Ok(())
    }

    /// Smallest and largest value across all datasets, or `None` when
    /// there are no values at all.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.datasets
            .iter()
            .flat_map(|d| d.data.iter().copied())
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}
