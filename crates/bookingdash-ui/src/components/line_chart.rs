//! Line chart drawn as inline SVG.

use bookingdash_core::chart::{AxisLabel, LegendEntry, LineGeometry, PlotArea, Polyline, Tick};
use dioxus::prelude::*;

/// Props for the line chart component.
#[derive(Props, Clone, PartialEq)]
pub struct LineChartProps {
    pub geometry: LineGeometry,
}

/// Gridlines, category labels, one polyline per dataset and a legend.
/// Lines are straight segments with point markers and no fill.
#[component]
pub fn LineChart(props: LineChartProps) -> Element {
    let geometry = &props.geometry;
    let plot = geometry.plot;
    let view_box = geometry.viewport.view_box();
    let label = line_summary(geometry);

    rsx! {
        figure { class: "chart line-chart",
            Legend { entries: geometry.legend.clone() }
            svg {
                view_box: "{view_box}",
                "preserveAspectRatio": "xMidYMid meet",
                role: "img",
                "aria-label": "{label}",
                {geometry.y_ticks.iter().map(|tick| render_tick(tick, &plot))}
                {geometry.x_labels.iter().map(|l| render_x_label(l, &plot))}
                line {
                    class: "chart-axis",
                    x1: plot.left,
                    x2: plot.right,
                    y1: plot.bottom,
                    y2: plot.bottom,
                }
                {geometry.lines.iter().map(render_polyline)}
            }
        }
    }
}

/// Gridline plus its value label on the left.
pub(crate) fn render_tick(tick: &Tick, plot: &PlotArea) -> Element {
    rsx! {
        g { class: "chart-tick",
            line {
                class: "chart-gridline",
                x1: plot.left,
                x2: plot.right,
                y1: tick.y,
                y2: tick.y,
            }
            text {
                x: plot.left - 6.0,
                y: tick.y,
                "text-anchor": "end",
                "dominant-baseline": "middle",
                "{tick.label}"
            }
        }
    }
}

/// Category label centered under its position.
pub(crate) fn render_x_label(label: &AxisLabel, plot: &PlotArea) -> Element {
    rsx! {
        text {
            class: "chart-label",
            x: label.x,
            y: plot.bottom + 18.0,
            "text-anchor": "middle",
            "{label.text}"
        }
    }
}

fn render_polyline(line: &Polyline) -> Element {
    let points = line.svg_points();
    rsx! {
        g { class: "chart-series",
            polyline {
                points: "{points}",
                fill: "none",
                stroke: "{line.color}",
                stroke_width: "2",
                stroke_linejoin: "round",
            }
            for point in line.points.iter() {
                circle {
                    cx: point.x,
                    cy: point.y,
                    r: "3",
                    fill: "{line.color}",
                }
            }
        }
    }
}

/// Dataset color swatches above a chart.
#[component]
pub fn Legend(entries: Vec<LegendEntry>) -> Element {
    rsx! {
        ul { class: "chart-legend",
            for entry in entries.iter() {
                li {
                    span { class: "legend-swatch", style: "background: {entry.color};" }
                    "{entry.label}"
                }
            }
        }
    }
}

/// Screen reader summary, e.g. "Daily Bookings: 7 points from May 3 to May 9".
pub fn line_summary(geometry: &LineGeometry) -> String {
    let names: Vec<&str> = geometry.lines.iter().map(|l| l.label.as_str()).collect();
    let count = geometry.x_labels.len();
    match (geometry.x_labels.first(), geometry.x_labels.last()) {
        (Some(first), Some(last)) if count > 1 => format!(
            "{}: {} points from {} to {}",
            names.join(", "),
            count,
            first.text,
            last.text
        ),
        (Some(only), _) => format!("{}: 1 point at {}", names.join(", "), only.text),
        _ => format!("{}: no data", names.join(", ")),
    }
}
