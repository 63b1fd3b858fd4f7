// src/application/mod.rs
pub mod history_browser;
pub mod note_deleter;
pub mod note_editor;
pub mod note_lister;
pub mod note_viewer;
pub mod profile_service;
pub mod query;
pub mod session;
pub mod shared_notes;

pub use history_browser::{HistoryBrowser, RecentChange};
pub use note_deleter::NoteDeleter;
pub use note_editor::{AttachmentKind, NoteDraft, NoteEditor};
pub use note_lister::NoteLister;
pub use note_viewer::{share_link, NoteRepository, NoteViewer};
pub use profile_service::ProfileService;
pub use query::{query_notes, SortMode};
pub use session::{sign_in_redirect, RouteGuard, Session};
pub use shared_notes::SharedNotes;
