//! Booking Dashboard Core Library
//!
//! Everything the welcome dashboard shows, minus the pixels.
//!
//! ## Overview
//!
//! A [`DashboardModel`] holds two chart series and an ordered list of
//! summary statistics. The built-in [`sample_model`] is an immutable
//! constant; [`config::load_model`] reads an alternative from JSON.
//! [`compose`] validates a model and lays it out as plain data (card list,
//! chart coordinates) that any renderer can draw.
//!
//! ## Quick Start
//!
//! ```
//! use bookingdash_core::{compose, sample_model, LayoutOptions};
//!
//! let layout = compose(sample_model(), &LayoutOptions::default()).unwrap();
//! assert_eq!(layout.cards.len(), 5);
//! assert_eq!(layout.charts[0].title, "Daily Bookings");
//! ```
//!
//! ## Failure model
//!
//! Malformed models (unknown icon tag, label/value count mismatch, a chart
//! without datasets) are rejected with a [`DashboardError`] before anything
//! is laid out. There is no partial dashboard.

pub mod chart;
pub mod config;
pub mod countup;
pub mod error;
pub mod layout;
pub mod sample;
pub mod types;

// Re-exports
pub use chart::{BarGeometry, LineGeometry, Viewport};
pub use countup::{format_thousands, CountUp};
pub use error::{ChartKind, DashboardError, DashboardResult};
pub use layout::{compose, ChartLayout, ChartPanel, DashboardLayout, LayoutOptions, StatCardLayout};
pub use sample::sample_model;
pub use types::*;
