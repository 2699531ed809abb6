//! Booking Dashboard UI Components
//!
//! Dioxus components that draw a [`DashboardLayout`] computed by
//! `bookingdash-core`. Components never touch the model directly; they
//! render coordinates and strings that were already laid out.
//!
//! ## Components
//!
//! - [`WelcomeDashboard`]: heading, stat card grid and chart grid
//! - [`StatCard`]: icon, title and a counting-up value
//! - [`LineChart`] / [`BarChart`]: inline SVG charts
//! - [`Panel`]: titled, elevated container
//!
//! Styling is class-based; the host application supplies the stylesheet.
//!
//! [`DashboardLayout`]: bookingdash_core::DashboardLayout

pub mod components;

pub use components::*;
