//! Reusable dashboard components.

mod bar_chart;
mod count_up;
mod dashboard;
mod icon;
mod line_chart;
mod panel;
mod stat_card;

pub use bar_chart::*;
pub use count_up::*;
pub use dashboard::*;
pub use icon::*;
pub use line_chart::*;
pub use panel::*;
pub use stat_card::*;
