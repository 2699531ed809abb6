//! Titled container for charts.

use dioxus::prelude::*;

/// An elevated panel with a subtitle-weight heading.
#[component]
pub fn Panel(title: String, children: Element) -> Element {
    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "{title}" }
            div { class: "panel-body", {children} }
        }
    }
}
