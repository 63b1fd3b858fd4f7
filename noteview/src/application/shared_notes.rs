// src/application/shared_notes.rs
use crate::application::query::filter_items;
use crate::domain::SharedNote;

/// Read-only list of notes shared with the current user
pub struct SharedNotes {
    notes: Vec<SharedNote>,
}

impl SharedNotes {
    pub fn new(notes: Vec<SharedNote>) -> Self {
        Self { notes }
    }

    /// Matches title, content, tags or the name of whoever shared the note
    pub fn search(&self, query: &str) -> Vec<SharedNote> {
        filter_items(&self.notes, query)
    }

    pub fn editable(&self) -> impl Iterator<Item = &SharedNote> {
        self.notes.iter().filter(|n| n.can_edit())
    }
}
