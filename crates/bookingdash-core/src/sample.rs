//! Built-in sample data for the welcome dashboard.

use std::sync::OnceLock;

use crate::types::{DashboardModel, Dataset, IconKey, SeriesData, StatEntry};

/// Stroke and fill color of the sample datasets.
pub const SAMPLE_COLOR: &str = "#3f51b5";

static SAMPLE: OnceLock<DashboardModel> = OnceLock::new();

/// The sample model. Built on first use; every call returns the same value.
pub fn sample_model() -> &'static DashboardModel {
    SAMPLE.get_or_init(build_sample)
}

fn build_sample() -> DashboardModel {
    DashboardModel {
        line: SeriesData::new(
            ["May 3", "May 4", "May 5", "May 6", "May 7", "May 8", "May 9"],
            vec![Dataset::new(
                "Daily Bookings",
                vec![3.0, 5.0, 8.0, 4.0, 7.0, 6.0, 9.0],
                SAMPLE_COLOR,
            )],
        ),
        bar: SeriesData::new(
            ["Flight", "Hotel", "TravelPackage", "Visa"],
            vec![Dataset::new(
                "Booking Types",
                vec![12.0, 8.0, 5.0, 3.0],
                SAMPLE_COLOR,
            )],
        ),
        stats: vec![
            StatEntry::new(IconKey::Dashboard, "Total Bookings", 28),
            StatEntry::new(IconKey::Shopping, "Flight", 12),
            StatEntry::new(IconKey::Box, "Hotel", 8),
            StatEntry::new(IconKey::Users, "Travel", 5),
            StatEntry::new(IconKey::Cog, "Visa", 3),
        ],
    }
}
