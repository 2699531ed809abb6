//! Theme for the booking dashboard.

mod styles;

pub use styles::GLOBAL_STYLES;
