// src/domain/history.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Version timeline of one note as shown on the history page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub note_id: String,
    pub title: String,
    pub versions: Vec<HistoryVersion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryVersion {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub change_description: String,
}

impl HistoryEntry {
    /// Versions are stored oldest first, so the latest is the last one
    pub fn latest_version(&self) -> Option<&HistoryVersion> {
        self.versions.last()
    }

    pub fn find_version(&self, version_id: &str) -> Option<&HistoryVersion> {
        self.versions.iter().find(|v| v.id == version_id)
    }
}
