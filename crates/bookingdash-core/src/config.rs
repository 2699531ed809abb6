//! Dashboard model files.
//!
//! A model file is JSON in the same shape as [`DashboardModel`], except
//! that stat icons are free-form tags. Tags are checked against
//! [`IconKey`](crate::types::IconKey) on load so that an unknown icon is
//! reported by name instead of as a generic parse failure.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::DashboardResult;
use crate::types::{CategorySeries, DashboardModel, StatEntry, TimeSeries};

/// On-disk stat entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatFileEntry {
    pub icon: String,
    pub title: String,
    pub value: u64,
}

/// On-disk dashboard model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelFile {
    pub line: TimeSeries,
    pub bar: CategorySeries,
    pub stats: Vec<StatFileEntry>,
}

impl ModelFile {
    /// Resolve icon tags and validate both series.
    pub fn into_model(self) -> DashboardResult<DashboardModel> {
        let stats = self
            .stats
            .into_iter()
            .map(|s| StatEntry::from_tag(&s.icon, s.title, s.value))
            .collect::<DashboardResult<Vec<_>>>()?;
        let model = DashboardModel {
            line: self.line,
            bar: self.bar,
            stats,
        };
        model.validate()?;
        Ok(model)
    }
}

impl From<&DashboardModel> for ModelFile {
    fn from(model: &DashboardModel) -> Self {
        Self {
            line: model.line.clone(),
            bar: model.bar.clone(),
            stats: model
                .stats
                .iter()
                .map(|s| StatFileEntry {
                    icon: s.icon.as_str().to_string(),
                    title: s.title.clone(),
                    value: s.value,
                })
                .collect(),
        }
    }
}

/// Parse and validate a model from JSON text.
pub fn parse_model(json: &str) -> DashboardResult<DashboardModel> {
    let file: ModelFile = serde_json::from_str(json)?;
    debug!(stats = file.stats.len(), "Parsed model file");
    file.into_model()
}

/// Read, parse and validate a model file.
pub fn load_model(path: &Path) -> DashboardResult<DashboardModel> {
    let json = std::fs::read_to_string(path)?;
    let model = parse_model(&json)?;
    info!(path = %path.display(), "Loaded dashboard model");
    Ok(model)
}

/// Pretty JSON in model file form.
pub fn to_json(model: &DashboardModel) -> DashboardResult<String> {
    Ok(serde_json::to_string_pretty(&ModelFile::from(model))?)
}
