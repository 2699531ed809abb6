//! Dashboard layout composition.
//!
//! [`compose`] is a single pure pass from a [`DashboardModel`] to everything
//! the view needs: heading, stat cards in model order, and the two chart
//! panels. Running it again on the same input yields an equal layout.

use tracing::debug;

use crate::chart::{bar_geometry, line_geometry, BarGeometry, LineGeometry, Viewport};
use crate::countup::format_thousands;
use crate::error::DashboardResult;
use crate::types::{DashboardModel, IconKey};

/// Title of the line chart panel.
pub const LINE_PANEL_TITLE: &str = "Daily Bookings";

/// Title of the bar chart panel.
pub const BAR_PANEL_TITLE: &str = "Booking Types Distribution";

/// Knobs for [`compose`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    /// Name used in the heading; `None` gives a plain greeting
    pub user_name: Option<String>,
    /// Stat cards per visual row at full width
    pub cards_per_row: usize,
    /// Upper bound on a stat card's width, in CSS pixels
    pub card_max_width: u32,
    /// Drawing surface for each chart
    pub chart_viewport: Viewport,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            user_name: None,
            cards_per_row: 5,
            card_max_width: 300,
            chart_viewport: Viewport::default(),
        }
    }
}

impl LayoutOptions {
    pub fn heading(&self) -> String {
        match self.user_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("Welcome, {}!", name),
            _ => "Welcome!".to_string(),
        }
    }
}

/// One stat card, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCardLayout {
    pub icon: IconKey,
    pub title: String,
    pub value: u64,
    /// `value` with thousands separators, as shown once counting finishes
    pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    Line(LineGeometry),
    Bar(BarGeometry),
}

/// A titled panel holding one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub title: String,
    pub chart: ChartLayout,
}

/// The complete, laid-out dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub heading: String,
    pub cards: Vec<StatCardLayout>,
    pub cards_per_row: usize,
    pub card_max_width: u32,
    /// Line chart first, bar chart second
    pub charts: [ChartPanel; 2],
}

impl DashboardLayout {
    /// Cards grouped into visual rows of at most `cards_per_row`.
    pub fn card_rows(&self) -> Vec<&[StatCardLayout]> {
        self.cards.chunks(self.cards_per_row.max(1)).collect()
    }
}

/// Validate `model` and lay it out. A malformed model yields an error and
/// no layout at all.
pub fn compose(model: &DashboardModel, options: &LayoutOptions) -> DashboardResult<DashboardLayout> {
    model.validate()?;

    let cards: Vec<StatCardLayout> = model
        .stats
        .iter()
        .map(|stat| StatCardLayout {
            icon: stat.icon,
            title: stat.title.clone(),
            value: stat.value,
            display: format_thousands(stat.value),
        })
        .collect();

    let line = line_geometry(&model.line, options.chart_viewport)?;
    let bar = bar_geometry(&model.bar, options.chart_viewport)?;

    debug!(cards = cards.len(), "Composed dashboard layout");

    Ok(DashboardLayout {
        heading: options.heading(),
        cards,
        cards_per_row: options.cards_per_row.max(1),
        card_max_width: options.card_max_width,
        charts: [
            ChartPanel {
                title: LINE_PANEL_TITLE.to_string(),
                chart: ChartLayout::Line(line),
            },
            ChartPanel {
                title: BAR_PANEL_TITLE.to_string(),
                chart: ChartLayout::Bar(bar),
            },
        ],
    })
}
