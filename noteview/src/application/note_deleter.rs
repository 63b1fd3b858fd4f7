// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, Notification};
use crate::ports::Notifier;

pub struct NoteDeleter<R: NoteRepository, N: Notifier> {
    repository: R,
    notifier: N,
}

impl<R: NoteRepository, N: Notifier> NoteDeleter<R, N> {
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Remove a note from the working set and return it
    pub fn delete_note(&mut self, note_id: &str) -> Result<Note, DomainError> {
        let removed = self.repository.delete_note(note_id)?;
        self.notifier.notify(Notification::info(
            "Note deleted",
            "Your note has been deleted successfully",
        ));
        Ok(removed)
    }
}
