// src/domain/note.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single Markdown note in the working set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shared_with: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<NoteVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteVersion {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub editor: String,
}

impl Note {
    /// Create an empty note stamped with the current time
    pub fn new(title: impl Into<String>) -> Self {
        Self::new_at(title, Utc::now())
    }

    /// Create an empty note whose id is derived from `now` (milliseconds since epoch)
    pub fn new_at(title: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: now.timestamp_millis().to_string(),
            title: title.into(),
            content: String::new(),
            created_at: now,
            updated_at: now,
            tags: Vec::new(),
            is_public: false,
            shared_with: Vec::new(),
            versions: Vec::new(),
            updated_by: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set both timestamps; `updated_at` is clamped so it never precedes `created_at`
    pub fn with_timestamps(mut self, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = updated_at.max(created_at);
        self
    }

    pub fn with_visibility(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn with_shared_with(mut self, shared_with: Vec<String>) -> Self {
        self.shared_with = shared_with;
        self
    }

    pub fn with_versions(mut self, versions: Vec<NoteVersion>) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_updated_by(mut self, editor: impl Into<String>) -> Self {
        self.updated_by = Some(editor.into());
        self
    }

    /// Mark the note as modified at `now`
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    /// Path of the read-only view of this note
    pub fn view_path(&self) -> String {
        format!("/note/{}", self.id)
    }

    /// Path of the editor for this note
    pub fn edit_path(&self) -> String {
        format!("/note/{}/edit", self.id)
    }
}
