//! Dashboard context for the desktop app.
//!
//! The layout is composed once at startup and shared read-only with every
//! component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_settings);
//!
//! // In child components
//! let settings = use_settings();
//! ```

use bookingdash_core::DashboardLayout;
use dioxus::prelude::*;

/// What the window shows.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSettings {
    /// Layout composed from the startup model
    pub layout: DashboardLayout,
    /// Whether stat values count up
    pub animate: bool,
}

/// Get the settings chosen on the command line.
pub fn get_settings() -> Option<DashboardSettings> {
    crate::get_settings()
}

/// Hook to access the dashboard settings from context.
///
/// `None` only when the app is mounted without going through `main`.
pub fn use_settings() -> Option<DashboardSettings> {
    use_context::<Option<DashboardSettings>>()
}
