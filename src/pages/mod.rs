//! Page components for the booking dashboard.

mod welcome;

pub use welcome::Welcome;
