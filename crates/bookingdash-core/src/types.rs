//! Core types for the booking dashboard
//!
//! The dashboard is driven by a single immutable [`DashboardModel`]: two
//! chart series and an ordered list of summary statistics. Position in a
//! sequence is the only identity anything has.

use serde::{Deserialize, Serialize};

use crate::error::{ChartKind, DashboardResult};

pub mod icon;
pub mod series;
pub mod stat;

pub use icon::IconKey;
pub use series::{CategorySeries, Dataset, SeriesData, TimeSeries};
pub use stat::StatEntry;

/// Everything the welcome dashboard displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardModel {
    /// Ordered time series for the line chart
    pub line: TimeSeries,
    /// Categorical series for the bar chart
    pub bar: CategorySeries,
    /// Stat cards, in display order
    pub stats: Vec<StatEntry>,
}

impl DashboardModel {
    /// Check the label/value length invariant on both charts.
    ///
    /// Icon tags are already closed over [`IconKey`] by the time a model
    /// exists, so only the series need checking here.
    pub fn validate(&self) -> DashboardResult<()> {
        self.line.validate(ChartKind::Line)?;
        self.bar.validate(ChartKind::Bar)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::sample::sample_model;

    #[test]
    fn sample_model_validates() {
        assert!(sample_model().validate().is_ok());
    }

    #[test]
    fn validate_reports_bar_mismatch() {
        let mut model = sample_model().clone();
        model.bar.datasets[0].data.pop();
        let err = model.validate().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::SeriesLengthMismatch {
                chart: ChartKind::Bar,
                labels: 4,
                values: 3,
                ..
            }
        ));
    }

    #[test]
    fn validate_checks_line_first() {
        let mut model = sample_model().clone();
        model.line.datasets.clear();
        model.bar.datasets.clear();
        let err = model.validate().unwrap_err();
        assert!(matches!(err, DashboardError::EmptySeries(ChartKind::Line)));
    }
}
