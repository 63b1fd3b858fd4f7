// src/infrastructure/memory.rs
use tracing::{debug, info, instrument};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};
use crate::infrastructure::fixtures;

/// Volatile note store; everything is lost when it is dropped
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteRepository {
    notes: Vec<Note>,
}

impl InMemoryNoteRepository {
    pub fn new(notes: Vec<Note>) -> Self {
        debug!(count = notes.len(), "Creating in-memory repository");
        Self { notes }
    }

    /// Repository seeded with the bundled sample notes
    pub fn with_fixtures() -> Result<Self, DomainError> {
        Ok(Self::new(fixtures::all_notes()?))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, DomainError> {
        self.notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }
}

impl NoteRepository for InMemoryNoteRepository {
    #[instrument(level = "debug", skip(self))]
    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        let index = self.position(id)?;
        Ok(self.notes[index].clone())
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        Ok(self.notes.clone())
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.id))]
    fn insert_note(&mut self, note: Note) -> Result<(), DomainError> {
        self.notes.insert(0, note);
        Ok(())
    }

    #[instrument(level = "debug", skip(self, note), fields(note_id = %note.id))]
    fn update_note(&mut self, note: Note) -> Result<(), DomainError> {
        let index = self.position(&note.id)?;
        self.notes[index] = note;
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    fn delete_note(&mut self, id: &str) -> Result<Note, DomainError> {
        let index = self.position(id)?;
        let removed = self.notes.remove(index);
        info!(note_id = id, "Removed note from working set");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fixtures_when_listing_then_returns_sample_notes() {
        let mut repo = InMemoryNoteRepository::with_fixtures().unwrap();

        let notes = repo.list_notes().unwrap();

        assert_eq!(notes.len(), 8);
        assert_eq!(notes[0].id, "1");
    }

    #[test]
    fn given_new_note_when_inserting_then_it_comes_first() {
        let mut repo = InMemoryNoteRepository::new(vec![Note::new("old").with_id("a")]);

        repo.insert_note(Note::new("new").with_id("b")).unwrap();

        let ids: Vec<_> = repo.list_notes().unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn given_existing_note_when_updating_then_replaces_in_place() {
        let mut repo = InMemoryNoteRepository::new(vec![
            Note::new("one").with_id("1"),
            Note::new("two").with_id("2"),
        ]);

        repo.update_note(Note::new("TWO").with_id("2")).unwrap();

        assert_eq!(repo.get_note("2").unwrap().title, "TWO");
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn given_missing_note_when_updating_or_deleting_then_returns_not_found() {
        let mut repo = InMemoryNoteRepository::default();

        assert_eq!(
            repo.update_note(Note::new("x").with_id("9")),
            Err(DomainError::NoteNotFound("9".to_string()))
        );
        assert_eq!(
            repo.delete_note("9"),
            Err(DomainError::NoteNotFound("9".to_string()))
        );
    }

    #[test]
    fn given_existing_note_when_deleting_then_returns_removed_note() {
        let mut repo = InMemoryNoteRepository::new(vec![Note::new("one").with_id("1")]);

        let removed = repo.delete_note("1").unwrap();

        assert_eq!(removed.title, "one");
        assert!(repo.is_empty());
    }
}
