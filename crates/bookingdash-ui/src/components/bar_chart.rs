//! Vertical bar chart drawn as inline SVG.

use bookingdash_core::chart::{format_tick, Bar, BarGeometry};
use dioxus::prelude::*;

use super::line_chart::{render_tick, render_x_label};
use super::Legend;

/// Props for the bar chart component.
#[derive(Props, Clone, PartialEq)]
pub struct BarChartProps {
    pub geometry: BarGeometry,
}

/// Gridlines, category labels and one filled bar per label and dataset.
#[component]
pub fn BarChart(props: BarChartProps) -> Element {
    let geometry = &props.geometry;
    let plot = geometry.plot;
    let view_box = geometry.viewport.view_box();
    let label = bar_summary(geometry);

    rsx! {
        figure { class: "chart bar-chart",
            Legend { entries: geometry.legend.clone() }
            svg {
                view_box: "{view_box}",
                "preserveAspectRatio": "xMidYMid meet",
                role: "img",
                "aria-label": "{label}",
                {geometry.y_ticks.iter().map(|tick| render_tick(tick, &plot))}
                {geometry.x_labels.iter().map(|l| render_x_label(l, &plot))}
                {geometry.bars.iter().map(render_bar)}
                line {
                    class: "chart-axis",
                    x1: plot.left,
                    x2: plot.right,
                    y1: geometry.baseline,
                    y2: geometry.baseline,
                }
            }
        }
    }
}

fn render_bar(bar: &Bar) -> Element {
    let tooltip = format!("{} ({}): {}", bar.category, bar.dataset, format_tick(bar.value));
    rsx! {
        rect {
            class: "chart-bar",
            x: bar.x,
            y: bar.y,
            width: bar.width,
            height: bar.height,
            fill: "{bar.color}",
            title { "{tooltip}" }
        }
    }
}

/// Screen reader summary, e.g. "Booking Types: Flight 12, Hotel 8".
pub fn bar_summary(geometry: &BarGeometry) -> String {
    let mut parts: Vec<String> = Vec::new();
    for entry in &geometry.legend {
        let values: Vec<String> = geometry
            .bars
            .iter()
            .filter(|b| b.dataset == entry.label)
            .map(|b| format!("{} {}", b.category, format_tick(b.value)))
            .collect();
        parts.push(format!("{}: {}", entry.label, values.join(", ")));
    }
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookingdash_core::chart::{bar_geometry, Viewport};
    use bookingdash_core::sample_model;

    #[test]
    fn sample_summary() {
        let geometry = bar_geometry(&sample_model().bar, Viewport::default()).unwrap();
        assert_eq!(
            bar_summary(&geometry),
            "Booking Types: Flight 12, Hotel 8, TravelPackage 5, Visa 3"
        );
    }
}
