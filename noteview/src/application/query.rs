//! Client-side search and ordering over small note collections.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, HistoryEntry, Note, SharedNote};

/// Display order for note listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    #[default]
    UpdatedDesc,
    UpdatedAsc,
    CreatedDesc,
    CreatedAsc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 6] = [
        SortMode::UpdatedDesc,
        SortMode::UpdatedAsc,
        SortMode::CreatedDesc,
        SortMode::CreatedAsc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::UpdatedDesc => "updated-desc",
            SortMode::UpdatedAsc => "updated-asc",
            SortMode::CreatedDesc => "created-desc",
            SortMode::CreatedAsc => "created-asc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
        }
    }

    pub fn compare(&self, a: &Note, b: &Note) -> Ordering {
        match self {
            SortMode::UpdatedDesc => b.updated_at.cmp(&a.updated_at),
            SortMode::UpdatedAsc => a.updated_at.cmp(&b.updated_at),
            SortMode::CreatedDesc => b.created_at.cmp(&a.created_at),
            SortMode::CreatedAsc => a.created_at.cmp(&b.created_at),
            SortMode::TitleAsc => compare_titles(&a.title, &b.title),
            SortMode::TitleDesc => compare_titles(&b.title, &a.title),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| DomainError::InvalidSortMode(s.to_string()))
    }
}

/// Title comparison approximating a locale collation: case-folded first,
/// lowercase before uppercase on ties.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Anything a free-text search box can filter
pub trait Searchable {
    /// `needle` must already be lowercased
    fn matches_lowercase(&self, needle: &str) -> bool;

    fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

impl Searchable for Note {
    fn matches_lowercase(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle)
            || contains_ignore_case(&self.content, needle)
            || self.tags.iter().any(|tag| contains_ignore_case(tag, needle))
    }
}

impl Searchable for SharedNote {
    fn matches_lowercase(&self, needle: &str) -> bool {
        self.note.matches_lowercase(needle) || contains_ignore_case(&self.shared_by.name, needle)
    }
}

impl Searchable for HistoryEntry {
    fn matches_lowercase(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle)
    }
}

/// Keep the items matching `query`, preserving their relative order.
/// An empty query keeps everything.
pub fn filter_items<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Sort a copy of `notes` by `mode` (stable) and keep those matching `query`.
pub fn query_notes(notes: &[Note], query: &str, mode: SortMode) -> Vec<Note> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| mode.compare(a, b));
    filter_items(&sorted, query)
}
