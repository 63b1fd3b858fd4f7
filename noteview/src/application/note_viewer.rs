// src/application/note_viewer.rs
use tracing::{debug, instrument};

use crate::domain::{DomainError, Note, Notification};
use crate::infrastructure::latency::SimulatedLatency;
use crate::ports::{Clipboard, Notifier};

/// Working set of notes owned by one page
pub trait NoteRepository {
    fn get_note(&mut self, id: &str) -> Result<Note, DomainError>;

    /// All notes in storage order
    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError>;

    /// Add a note in front of the existing ones
    fn insert_note(&mut self, note: Note) -> Result<(), DomainError>;

    /// Replace the note with the same id
    fn update_note(&mut self, note: Note) -> Result<(), DomainError>;

    /// Remove a note and return it
    fn delete_note(&mut self, id: &str) -> Result<Note, DomainError>;
}

pub struct NoteViewer<R: NoteRepository, N: Notifier> {
    repository: R,
    notifier: N,
    latency: SimulatedLatency,
}

impl<R: NoteRepository, N: Notifier> NoteViewer<R, N> {
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
            latency: SimulatedLatency::none(),
        }
    }

    /// Delay applied before a note is shown, mimicking the initial load
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    #[instrument(level = "debug", skip(self))]
    pub fn view_note(&mut self, note_id: &str) -> Result<Note, DomainError> {
        self.latency.wait();
        self.repository.get_note(note_id)
    }

    /// Flip a note between public and private
    #[instrument(level = "debug", skip(self))]
    pub fn toggle_visibility(&mut self, note_id: &str) -> Result<Note, DomainError> {
        let mut note = self.repository.get_note(note_id)?;
        note.is_public = !note.is_public;
        self.repository.update_note(note.clone())?;
        debug!(note_id, is_public = note.is_public, "Visibility changed");

        let notification = if note.is_public {
            Notification::info(
                "Note is now public",
                "Anyone with the link can view this note",
            )
        } else {
            Notification::info("Note is now private", "Only you can access this note")
        };
        self.notifier.notify(notification);
        Ok(note)
    }

    /// Write the absolute link of a note to the clipboard and return it
    pub fn copy_link<C: Clipboard>(&self, note: &Note, origin: &str, clipboard: &C) -> String {
        let link = share_link(origin, &note.id);
        clipboard.write_text(&link);
        self.notifier
            .notify(Notification::info("Link copied", "Note link copied to clipboard"));
        link
    }
}

pub fn share_link(origin: &str, note_id: &str) -> String {
    format!("{}/note/{}", origin.trim_end_matches('/'), note_id)
}
