//! Chart geometry.
//!
//! Turns validated series into plain coordinates in SVG user space. The UI
//! layer only draws what is computed here, which keeps every chart a pure
//! function of its input.

mod bar;
mod line;
mod scale;

pub use bar::{bar_geometry, Bar, BarGeometry};
pub use line::{line_geometry, LineGeometry, Polyline};
pub use scale::{format_tick, LinearScale, DEFAULT_MAX_TICKS};

use crate::types::SeriesData;

/// Space reserved around the plot area for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Total drawing surface of one chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            insets: Insets {
                top: 16.0,
                right: 16.0,
                bottom: 32.0,
                left: 40.0,
            },
        }
    }
}

impl Viewport {
    /// The rectangle inside the insets. Never inverted, even for a viewport
    /// smaller than its insets.
    pub fn plot_area(&self) -> PlotArea {
        let left = self.insets.left;
        let top = self.insets.top;
        PlotArea {
            left,
            top,
            right: (self.width - self.insets.right).max(left),
            bottom: (self.height - self.insets.bottom).max(top),
        }
    }

    /// SVG `viewBox` attribute value.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Rectangle the data is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A y-axis gridline.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Vertical position in SVG units
    pub y: f64,
    pub label: String,
}

/// A category label under the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    /// Horizontal center in SVG units
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

fn legend(series: &SeriesData) -> Vec<LegendEntry> {
    series
        .datasets
        .iter()
        .map(|d| LegendEntry {
            label: d.label.clone(),
            color: d.color.clone(),
        })
        .collect()
}

fn y_ticks(scale: &LinearScale, plot: &PlotArea) -> Vec<Tick> {
    scale
        .ticks()
        .into_iter()
        .map(|value| Tick {
            value,
            y: scale.project(value, plot.bottom, plot.top),
            label: format_tick(value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_respects_insets() {
        let plot = Viewport::default().plot_area();
        assert_eq!(plot.left, 40.0);
        assert_eq!(plot.top, 16.0);
        assert_eq!(plot.width(), 544.0);
        assert_eq!(plot.height(), 252.0);
    }

    #[test]
    fn tiny_viewport_does_not_invert() {
        let viewport = Viewport {
            width: 10.0,
            height: 10.0,
            ..Viewport::default()
        };
        let plot = viewport.plot_area();
        assert_eq!(plot.width(), 0.0);
        assert_eq!(plot.height(), 0.0);
    }

    #[test]
    fn view_box_string() {
        assert_eq!(Viewport::default().view_box(), "0 0 600 300");
    }
}
