// src/util/testing.rs

use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

#[derive(Default)]
struct MockState {
    notes: Vec<Note>,
    list_result: Option<Vec<Note>>,
}

/// Shared mock repository for testing use cases that depend on NoteRepository
///
/// Clones share state, so a test can hand one handle to a use case and keep
/// another to inspect what the use case did.
///
/// # Examples
///
/// ```
/// use noteview::util::testing::MockNoteRepository;
/// use noteview::domain::Note;
///
/// let mock = MockNoteRepository::builder()
///     .with_note(Note::new("Question").with_id("123"))
///     .build();
/// assert_eq!(mock.snapshot().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockNoteRepository {
    state: Rc<RefCell<MockState>>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Current notes in storage order
    pub fn snapshot(&self) -> Vec<Note> {
        self.state.borrow().notes.clone()
    }
}

impl NoteRepository for MockNoteRepository {
    fn get_note(&mut self, id: &str) -> Result<Note, DomainError> {
        self.state
            .borrow()
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))
    }

    fn list_notes(&mut self) -> Result<Vec<Note>, DomainError> {
        let state = self.state.borrow();
        Ok(state.list_result.clone().unwrap_or_else(|| state.notes.clone()))
    }

    fn insert_note(&mut self, note: Note) -> Result<(), DomainError> {
        self.state.borrow_mut().notes.insert(0, note);
        Ok(())
    }

    fn update_note(&mut self, note: Note) -> Result<(), DomainError> {
        let mut state = self.state.borrow_mut();
        let slot = state
            .notes
            .iter_mut()
            .find(|n| n.id == note.id)
            .ok_or_else(|| DomainError::NoteNotFound(note.id.clone()))?;
        *slot = note;
        Ok(())
    }

    fn delete_note(&mut self, id: &str) -> Result<Note, DomainError> {
        let mut state = self.state.borrow_mut();
        let index = state
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))?;
        Ok(state.notes.remove(index))
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
#[derive(Default)]
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    list_result: Option<Vec<Note>>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a note that can be retrieved, updated and deleted
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Configure list_notes to return exactly `results`, independent of stored notes
    pub fn with_list_result(mut self, results: Vec<Note>) -> Self {
        self.list_result = Some(results);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            state: Rc::new(RefCell::new(MockState {
                notes: self.notes,
                list_result: self.list_result,
            })),
        }
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["pulldown_cmark"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // RUST_LOG wins; otherwise trace for this crate only
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("noteview=trace"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
