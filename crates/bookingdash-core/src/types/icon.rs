//! Stat card icon tags

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DashboardError;

/// Closed set of icons a stat card may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKey {
    /// Trend line, used for overall totals
    Dashboard,
    /// Shopping cart
    Shopping,
    /// Package
    Box,
    /// Group of people
    Users,
    /// Gear
    Cog,
}

impl IconKey {
    /// Every key, in declaration order.
    pub const ALL: [IconKey; 5] = [
        IconKey::Dashboard,
        IconKey::Shopping,
        IconKey::Box,
        IconKey::Users,
        IconKey::Cog,
    ];

    /// The tag used in model files.
    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Dashboard => "dashboard",
            IconKey::Shopping => "shopping",
            IconKey::Box => "box",
            IconKey::Users => "users",
            IconKey::Cog => "cog",
        }
    }
}

impl FromStr for IconKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownIcon(s.to_string()))
    }
}

impl std::fmt::Display for IconKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
