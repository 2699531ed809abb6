//! Line chart geometry.

use tracing::debug;

use super::{legend, y_ticks, AxisLabel, LegendEntry, LinearScale, PlotArea, Point, Tick, Viewport, DEFAULT_MAX_TICKS};
use crate::error::{ChartKind, DashboardError, DashboardResult};
use crate::types::TimeSeries;

/// One dataset as a connected run of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub label: String,
    pub color: String,
    pub points: Vec<Point>,
}

impl Polyline {
    /// SVG `points` attribute value.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.2},{:.2}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineGeometry {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub scale: LinearScale,
    pub y_ticks: Vec<Tick>,
    pub x_labels: Vec<AxisLabel>,
    pub lines: Vec<Polyline>,
    pub legend: Vec<LegendEntry>,
}

/// Lay out `series` as one polyline per dataset. Labels sit at evenly
/// spaced positions from the left edge of the plot to the right edge.
pub fn line_geometry(series: &TimeSeries, viewport: Viewport) -> DashboardResult<LineGeometry> {
    series.validate(ChartKind::Line)?;

    let plot = viewport.plot_area();
    let (lo, hi) = series.value_range().unwrap_or((0.0, 1.0));
    let scale = LinearScale::fit(lo, hi, DEFAULT_MAX_TICKS, false)
        .ok_or(DashboardError::ValueRangeOverflow(ChartKind::Line))?;

    let count = series.labels.len();
    let x_at = |i: usize| {
        if count <= 1 {
            plot.left + plot.width() / 2.0
        } else {
            plot.left + plot.width() * i as f64 / (count - 1) as f64
        }
    };

    let x_labels = series
        .labels
        .iter()
        .enumerate()
        .map(|(i, text)| AxisLabel {
            text: text.clone(),
            x: x_at(i),
        })
        .collect();

    let lines: Vec<Polyline> = series
        .datasets
        .iter()
        .map(|dataset| Polyline {
            label: dataset.label.clone(),
            color: dataset.color.clone(),
            points: dataset
                .data
                .iter()
                .enumerate()
                .map(|(i, &value)| Point {
                    x: x_at(i),
                    y: scale.project(value, plot.bottom, plot.top),
                })
                .collect(),
        })
        .collect();

    debug!(
        labels = count,
        datasets = lines.len(),
        min = scale.min,
        max = scale.max,
        "Computed line chart geometry"
    );

    Ok(LineGeometry {
        viewport,
        plot,
        scale,
        y_ticks: y_ticks(&scale, &plot),
        x_labels,
        lines,
        legend: legend(series),
    })
}
