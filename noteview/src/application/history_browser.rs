// src/application/history_browser.rs
use serde::Serialize;
use tracing::{info, instrument};

use crate::application::query::filter_items;
use crate::domain::{DomainError, HistoryEntry, HistoryVersion, Notification};
use crate::ports::Notifier;

/// Latest change of one note, as shown in the "recent changes" tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentChange {
    pub note_id: String,
    pub title: String,
    pub latest_version: HistoryVersion,
    pub version_count: usize,
}

impl RecentChange {
    /// "1 version" or "N versions"
    pub fn version_label(&self) -> String {
        match self.version_count {
            1 => "1 version".to_string(),
            n => format!("{n} versions"),
        }
    }
}

pub struct HistoryBrowser<N: Notifier> {
    entries: Vec<HistoryEntry>,
    notifier: N,
}

impl<N: Notifier> HistoryBrowser<N> {
    pub fn new(entries: Vec<HistoryEntry>, notifier: N) -> Self {
        Self { entries, notifier }
    }

    /// Entries whose note title contains `query`, every version included
    pub fn all_versions(&self, query: &str) -> Vec<HistoryEntry> {
        filter_items(&self.entries, query)
    }

    /// Most recent version of every matching entry; entries without versions are skipped
    pub fn recent_changes(&self, query: &str) -> Vec<RecentChange> {
        self.all_versions(query)
            .into_iter()
            .filter_map(|entry| {
                let latest_version = entry.latest_version()?.clone();
                Some(RecentChange {
                    note_id: entry.note_id,
                    title: entry.title,
                    version_count: entry.versions.len(),
                    latest_version,
                })
            })
            .collect()
    }

    /// Pretend to roll a note back to an earlier version
    #[instrument(level = "debug", skip(self))]
    pub fn restore(&self, note_id: &str, version_id: &str) -> Result<HistoryVersion, DomainError> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.note_id == note_id)
            .ok_or_else(|| DomainError::HistoryNotFound(note_id.to_string()))?;
        let version = entry
            .find_version(version_id)
            .ok_or_else(|| DomainError::VersionNotFound {
                note_id: note_id.to_string(),
                version_id: version_id.to_string(),
            })?
            .clone();

        info!(note_id, version_id, "Restored version");
        self.notifier.notify(Notification::info(
            format!("Version {version_id} restored for note: {note_id}"),
            "The selected version has been restored",
        ));
        Ok(version)
    }
}
