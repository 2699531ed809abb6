//! Welcome page - the dashboard shown at startup.

use bookingdash_ui::WelcomeDashboard;
use dioxus::prelude::*;

use crate::context::use_settings;

/// Welcome page component.
#[component]
pub fn Welcome() -> Element {
    let Some(settings) = use_settings() else {
        return rsx! {
            main { class: "dashboard",
                p { class: "dashboard-empty", "No dashboard loaded." }
            }
        };
    };

    rsx! {
        WelcomeDashboard {
            layout: settings.layout,
            animate: settings.animate,
        }
    }
}
