//! Welcome Dashboard - heading, stat cards and charts.

use bookingdash_core::{ChartLayout, DashboardLayout};
use dioxus::prelude::*;

use super::{BarChart, LineChart, Panel, StatCard};

/// Props for the welcome dashboard.
#[derive(Props, Clone, PartialEq)]
pub struct WelcomeDashboardProps {
    /// Pre-composed layout
    pub layout: DashboardLayout,
    /// Animate stat values (default: true)
    #[props(default = true)]
    pub animate: bool,
}

/// Full dashboard view.
///
/// Stat cards are split into rows of at most `cards_per_row` in layout
/// order; each row is centered, so a short last row sits in the middle.
/// Cards are capped at `card_max_width` and centered in their cells. The two charts share a row that collapses to a single
/// column on narrow windows.
///
/// # Example
///
/// ```rust,ignore
/// let layout = compose(sample_model(), &LayoutOptions::default())?;
/// rsx! {
///     WelcomeDashboard { layout }
/// }
/// ```
#[component]
pub fn WelcomeDashboard(props: WelcomeDashboardProps) -> Element {
    let layout = &props.layout;
    let animate = props.animate;
    let grid_style = format!(
        "--cards-per-row: {}; --card-max-width: {}px;",
        layout.cards_per_row, layout.card_max_width
    );

    rsx! {
        main { class: "dashboard",
            h1 { class: "dashboard-heading", "{layout.heading}" }

            // Stat cards, one row element per chunk of `cards_per_row`
            section { class: "stat-grid", style: "{grid_style}",
                for (row_idx, row) in layout.card_rows().into_iter().enumerate() {
                    div { key: "{row_idx}", class: "stat-row",
                        for (idx, card) in row.iter().enumerate() {
                            div { key: "{idx}", class: "stat-cell",
                                StatCard { entry: card.clone(), animate }
                            }
                        }
                    }
                }
            }

            // Charts
            section { class: "chart-grid",
                for (idx, panel) in layout.charts.iter().enumerate() {
                    div { key: "{idx}", class: "chart-cell",
                        Panel { title: panel.title.clone(),
                            {render_chart(&panel.chart)}
                        }
                    }
                }
            }
        }
    }
}

fn render_chart(chart: &ChartLayout) -> Element {
    match chart {
        ChartLayout::Line(geometry) => rsx! {
            LineChart { geometry: geometry.clone() }
        },
        ChartLayout::Bar(geometry) => rsx! {
            BarChart { geometry: geometry.clone() }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookingdash_core::{compose, sample_model, LayoutOptions};

    #[test]
    fn props_equal_for_same_layout() {
        let layout = compose(sample_model(), &LayoutOptions::default()).unwrap();
        let a = WelcomeDashboardProps { layout: layout.clone(), animate: true };
        let b = WelcomeDashboardProps { layout, animate: true };
        assert!(a == b);
    }
}
