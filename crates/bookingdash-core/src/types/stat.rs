//! Summary statistics shown as stat cards

use serde::{Deserialize, Serialize};

use super::IconKey;
use crate::error::DashboardResult;

/// One labelled metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub icon: IconKey,
    pub title: String,
    pub value: u64,
}

impl StatEntry {
    pub fn new(icon: IconKey, title: impl Into<String>, value: u64) -> Self {
        Self {
            icon,
            title: title.into(),
            value,
        }
    }

    /// Build from a raw icon tag, failing on tags outside [`IconKey`].
    pub fn from_tag(tag: &str, title: impl Into<String>, value: u64) -> DashboardResult<Self> {
        Ok(Self::new(tag.parse()?, title, value))
    }
}
