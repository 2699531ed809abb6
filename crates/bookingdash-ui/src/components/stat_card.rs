//! Stat Card - one labelled metric with an icon and a rising count.

use bookingdash_core::StatCardLayout;
use dioxus::prelude::*;

use super::{CountUp, Icon};

/// Props for the stat card component.
#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// The laid-out stat to show
    pub entry: StatCardLayout,
    /// Animate the value from zero (default: true)
    #[props(default = true)]
    pub animate: bool,
}

/// Stat card: icon on the left, title above a count-up value on the right.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    let entry = &props.entry;
    let label = format!("{}: {}", entry.title, entry.display);

    rsx! {
        article { class: "stat-card", "aria-label": "{label}",
            div { class: "stat-icon",
                Icon { icon: entry.icon }
            }
            div { class: "stat-text",
                div { class: "stat-title", "{entry.title}" }
                div { class: "stat-value",
                    CountUp { end: entry.value, animate: props.animate }
                }
            }
        }
    }
}
