use dioxus::prelude::*;

use crate::context::get_settings;
use crate::pages::Welcome;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the dashboard settings context.
#[component]
pub fn App() -> Element {
    use_context_provider(get_settings);

    rsx! {
        style { {GLOBAL_STYLES} }
        Welcome {}
    }
}
