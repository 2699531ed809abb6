//! Vertical bar chart geometry.

use tracing::debug;

use super::{legend, y_ticks, AxisLabel, LegendEntry, LinearScale, PlotArea, Tick, Viewport, DEFAULT_MAX_TICKS};
use crate::error::{ChartKind, DashboardError, DashboardResult};
use crate::types::CategorySeries;

/// Share of a category band taken by its group of bars.
const CATEGORY_FILL: f64 = 0.8;

/// Share of a bar slot taken by the bar itself.
const BAR_FILL: f64 = 0.9;

/// A single bar, in SVG `rect` terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    pub dataset: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub scale: LinearScale,
    /// Vertical position of the zero line
    pub baseline: f64,
    pub y_ticks: Vec<Tick>,
    pub x_labels: Vec<AxisLabel>,
    pub bars: Vec<Bar>,
    pub legend: Vec<LegendEntry>,
}

/// Lay out `series` as grouped vertical bars, one band per label. Bars
/// grow up from zero, or down from it for negative values.
pub fn bar_geometry(series: &CategorySeries, viewport: Viewport) -> DashboardResult<BarGeometry> {
    series.validate(ChartKind::Bar)?;

    let plot = viewport.plot_area();
    let (lo, hi) = series.value_range().unwrap_or((0.0, 1.0));
    let scale = LinearScale::fit(lo, hi, DEFAULT_MAX_TICKS, true)
        .ok_or(DashboardError::ValueRangeOverflow(ChartKind::Bar))?;
    let baseline = scale.project(0.0, plot.bottom, plot.top);

    let categories = series.labels.len();
    let band = if categories == 0 {
        0.0
    } else {
        plot.width() / categories as f64
    };
    let group = band * CATEGORY_FILL;
    let slot = group / series.datasets.len() as f64;
    let width = slot * BAR_FILL;

    let mut x_labels = Vec::with_capacity(categories);
    let mut bars = Vec::with_capacity(categories * series.datasets.len());
    for (i, category) in series.labels.iter().enumerate() {
        let center = plot.left + band * (i as f64 + 0.5);
        x_labels.push(AxisLabel {
            text: category.clone(),
            x: center,
        });

        let group_left = center - group / 2.0;
        for (j, dataset) in series.datasets.iter().enumerate() {
            let value = dataset.data[i];
            let top = scale.project(value, plot.bottom, plot.top);
            bars.push(Bar {
                category: category.clone(),
                dataset: dataset.label.clone(),
                value,
                x: group_left + slot * j as f64 + (slot - width) / 2.0,
                y: top.min(baseline),
                width,
                height: (baseline - top).abs(),
                color: dataset.color.clone(),
            });
        }
    }

    debug!(
        categories,
        datasets = series.datasets.len(),
        max = scale.max,
        "Computed bar chart geometry"
    );

    Ok(BarGeometry {
        viewport,
        plot,
        scale,
        baseline,
        y_ticks: y_ticks(&scale, &plot),
        x_labels,
        bars,
        legend: legend(series),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_model;
    use crate::types::{Dataset, SeriesData};

    #[test]
    fn sample_bar_has_one_bar_per_label() {
        let geometry = bar_geometry(&sample_model().bar, Viewport::default()).unwrap();
        let categories: Vec<&str> = geometry.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(categories, ["Flight", "Hotel", "TravelPackage", "Visa"]);
        assert!(geometry.bars.iter().all(|b| b.color == "#3f51b5"));
    }

    #[test]
    fn heights_are_proportional() {
        let geometry = bar_geometry(&sample_model().bar, Viewport::default()).unwrap();
        let bars = &geometry.bars;
        // Flight (12) vs Visa (3)
        let ratio = bars[0].height / bars[3].height;
        assert!((ratio - 4.0).abs() < 1e-9);
        // all sit on the baseline
        assert!(bars
            .iter()
            .all(|b| (b.y + b.height - geometry.baseline).abs() < 1e-9));
    }

    #[test]
    fn baseline_is_plot_bottom_for_positive_data() {
        let geometry = bar_geometry(&sample_model().bar, Viewport::default()).unwrap();
        assert_eq!(geometry.baseline, geometry.plot.bottom);
    }

    #[test]
    fn bars_do_not_overlap() {
        let geometry = bar_geometry(&sample_model().bar, Viewport::default()).unwrap();
        assert!(geometry
            .bars
            .windows(2)
            .all(|w| w[0].x + w[0].width < w[1].x));
    }

    #[test]
    fn negative_value_hangs_below_zero() {
        let series = SeriesData::new(
            ["up", "down"],
            vec![Dataset::new("s", vec![4.0, -2.0], "#000")],
        );
        let geometry = bar_geometry(&series, Viewport::default()).unwrap();
        let down = &geometry.bars[1];
        assert_eq!(down.y, geometry.baseline);
        assert!(down.height > 0.0);
    }

    #[test]
    fn two_datasets_share_a_band() {
        let series = SeriesData::new(
            ["a"],
            vec![
                Dataset::new("one", vec![1.0], "#111"),
                Dataset::new("two", vec![2.0], "#222"),
            ],
        );
        let geometry = bar_geometry(&series, Viewport::default()).unwrap();
        assert_eq!(geometry.bars.len(), 2);
        assert!(geometry.bars[0].x < geometry.bars[1].x);
        assert_eq!(geometry.legend.len(), 2);
    }

    #[test]
    fn mismatch_fails_before_drawing() {
        let mut series = sample_model().bar.clone();
        series.datasets[0].data.push(1.0);
        assert!(matches!(
            bar_geometry(&series, Viewport::default()),
            Err(DashboardError::SeriesLengthMismatch { chart: ChartKind::Bar, .. })
        ));
    }

    #[test]
    fn overflowing_range_fails() {
        let series = SeriesData::new(["a", "b"], vec![Dataset::new("s", vec![-1e308, 1e308], "#000")]);
        assert!(matches!(
            bar_geometry(&series, Viewport::default()),
            Err(DashboardError::ValueRangeOverflow(ChartKind::Bar))
        ));
    }

    #[test]
    fn empty_series_fails() {
        let series = SeriesData::new(["a"], vec![]);
        assert!(matches!(
            bar_geometry(&series, Viewport::default()),
            Err(DashboardError::EmptySeries(ChartKind::Bar))
        ));
    }
}
