// src/application/note_lister.rs
use tracing::debug;

use crate::application::query::{query_notes, SortMode};
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List notes in display order, optionally filtered
    ///
    /// # Arguments
    /// * `search_query` - Optional case-insensitive term matched against title, content and tags
    /// * `sort` - Display order
    ///
    /// # Returns
    /// Matching notes; an empty vector is the "no notes" state
    pub fn list_notes(
        &mut self,
        search_query: Option<&str>,
        sort: SortMode,
    ) -> Result<Vec<Note>, DomainError> {
        let notes = self.repository.list_notes()?;
        let result = query_notes(&notes, search_query.unwrap_or(""), sort);
        debug!(total = notes.len(), shown = result.len(), %sort, "Listed notes");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::MockNoteRepository;

    #[test]
    fn given_no_search_when_listing_notes_then_returns_all_notes() {
        // Arrange
        let repo = MockNoteRepository::builder()
            .with_note(Note::new("First").with_id("1"))
            .with_note(Note::new("Second").with_id("2"))
            .build();
        let mut lister = NoteLister::new(repo);

        // Act
        let result = lister.list_notes(None, SortMode::TitleAsc).unwrap();

        // Assert
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn given_search_query_when_listing_notes_then_returns_filtered_notes() {
        // Arrange
        let repo = MockNoteRepository::builder()
            .with_note(Note::new("What is a Tree?").with_id("1"))
            .with_note(Note::new("What is a Graph?").with_id("2"))
            .build();
        let mut lister = NoteLister::new(repo);

        // Act
        let result = lister.list_notes(Some("tree"), SortMode::default()).unwrap();

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "1");
    }

    #[test]
    fn given_configured_listing_when_listing_then_sorts_repository_result() {
        let repo = MockNoteRepository::builder()
            .with_list_result(vec![
                Note::new("b").with_id("2"),
                Note::new("a").with_id("1"),
            ])
            .build();
        let mut lister = NoteLister::new(repo);

        let result = lister.list_notes(None, SortMode::TitleAsc).unwrap();

        assert_eq!(result[0].title, "a");
    }
}
