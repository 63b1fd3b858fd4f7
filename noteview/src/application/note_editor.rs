// src/application/note_editor.rs
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, instrument};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Note, Notification};
use crate::infrastructure::latency::SimulatedLatency;
use crate::ports::Notifier;

/// Unsaved editor state for a new or existing note
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteDraft {
    /// `None` while the note has never been saved
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }

    /// Add a trimmed tag; blanks and duplicates are ignored
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }
}

/// Media the editor pretends to attach
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Video,
    File,
    Audio,
}

impl fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttachmentKind::Image => "image",
            AttachmentKind::Video => "video",
            AttachmentKind::File => "file",
            AttachmentKind::Audio => "audio",
        };
        f.write_str(name)
    }
}

impl FromStr for AttachmentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(AttachmentKind::Image),
            "video" => Ok(AttachmentKind::Video),
            "file" => Ok(AttachmentKind::File),
            "audio" => Ok(AttachmentKind::Audio),
            other => Err(format!("unknown attachment kind: {other}")),
        }
    }
}

pub struct NoteEditor<R: NoteRepository, N: Notifier> {
    repository: R,
    notifier: N,
    latency: SimulatedLatency,
    recording: bool,
}

impl<R: NoteRepository, N: Notifier> NoteEditor<R, N> {
    pub fn new(repository: R, notifier: N) -> Self {
        Self {
            repository,
            notifier,
            latency: SimulatedLatency::none(),
            recording: false,
        }
    }

    /// Delay applied to every save
    pub fn with_latency(mut self, latency: SimulatedLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Quick-create from the dashboard: an empty note with only a title
    pub fn create_note(&mut self, title: &str) -> Result<Note, DomainError> {
        self.create_note_at(title, Utc::now())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn create_note_at(&mut self, title: &str, now: DateTime<Utc>) -> Result<Note, DomainError> {
        if title.trim().is_empty() {
            self.notifier
                .notify(Notification::destructive("Error", "Note title cannot be empty"));
            return Err(DomainError::EmptyTitle);
        }

        let note = Note::new_at(title, now).with_id(self.unused_id(now)?);
        self.repository.insert_note(note.clone())?;
        info!(note_id = %note.id, "Created note");

        self.notifier.notify(Notification::info(
            "Note created",
            "Your new note has been created successfully",
        ));
        Ok(note)
    }

    /// Start editing `note_id`, or a blank draft when it is `None`
    pub fn load_draft(&mut self, note_id: Option<&str>) -> Result<NoteDraft, DomainError> {
        match note_id {
            Some(id) => Ok(NoteDraft::from_note(&self.repository.get_note(id)?)),
            None => Ok(NoteDraft::new()),
        }
    }

    pub fn save(&mut self, draft: &NoteDraft) -> Result<Note, DomainError> {
        self.save_at(draft, Utc::now())
    }

    /// Persist a draft into the working set after the simulated round-trip.
    ///
    /// A blank title aborts before any waiting; otherwise the save always succeeds.
    #[instrument(level = "debug", skip(self, draft), fields(note_id = ?draft.id))]
    pub fn save_at(&mut self, draft: &NoteDraft, now: DateTime<Utc>) -> Result<Note, DomainError> {
        if draft.title.trim().is_empty() {
            self.notifier.notify(Notification::destructive(
                "Error",
                "Please enter a title for your note",
            ));
            return Err(DomainError::EmptyTitle);
        }

        self.latency.wait();

        let note = match &draft.id {
            Some(id) => {
                let mut note = self.repository.get_note(id)?;
                note.title = draft.title.clone();
                note.content = draft.content.clone();
                note.tags = draft.tags.clone();
                note.touch(now);
                self.repository.update_note(note.clone())?;
                note
            }
            None => {
                let note = Note::new_at(draft.title.clone(), now)
                    .with_id(self.unused_id(now)?)
                    .with_content(draft.content.clone())
                    .with_tags(draft.tags.clone());
                self.repository.insert_note(note.clone())?;
                note
            }
        };
        debug!(note_id = %note.id, "Saved note");

        self.notifier.notify(Notification::info(
            "Note saved",
            "Your note has been saved successfully",
        ));
        Ok(note)
    }

    /// Millisecond timestamp of `now`, bumped past any id already in the working set
    fn unused_id(&mut self, now: DateTime<Utc>) -> Result<String, DomainError> {
        let mut millis = now.timestamp_millis();
        loop {
            let id = millis.to_string();
            match self.repository.get_note(&id) {
                Ok(_) => millis += 1,
                Err(DomainError::NoteNotFound(_)) => return Ok(id),
                Err(err) => return Err(err),
            }
        }
    }

    /// Start or stop dictation; transcription itself is not available
    pub fn toggle_recording(&mut self) -> bool {
        self.recording = !self.recording;
        let notification = if self.recording {
            Notification::info(
                "Recording started",
                "Speak clearly to transcribe your speech to text",
            )
        } else {
            Notification::info(
                "Recording stopped",
                "Your speech has been transcribed to text",
            )
        };
        self.notifier.notify(notification);
        self.recording
    }

    /// Acknowledge an attachment request; no file is read
    pub fn attach(&self, kind: AttachmentKind) {
        self.notifier.notify(Notification::info(
            format!("Adding {kind}"),
            format!("Select a {kind} to attach to your note"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::notifier::RecordingNotifier;
    use crate::util::testing::MockNoteRepository;
    use chrono::TimeZone;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn given_blank_title_when_creating_then_rejects_and_adds_nothing(#[case] title: &str) {
        // Arrange
        let notifier = RecordingNotifier::new();
        let repo = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(repo.clone(), notifier.clone());

        // Act
        let result = editor.create_note_at(title, now());

        // Assert
        assert_eq!(result, Err(DomainError::EmptyTitle));
        let last = notifier.last().expect("Should notify");
        assert!(last.is_destructive());
        assert_eq!(last.description, "Note title cannot be empty");
        assert!(repo.snapshot().is_empty());
    }

    #[test]
    fn given_title_when_creating_then_prepends_note_with_timestamp_id() {
        // Arrange
        let notifier = RecordingNotifier::new();
        let repo = MockNoteRepository::builder()
            .with_note(Note::new("Existing").with_id("1"))
            .build();
        let mut editor = NoteEditor::new(repo.clone(), notifier.clone());

        // Act
        let note = editor.create_note_at("Fresh idea", now()).unwrap();

        // Assert
        assert_eq!(note.id, now().timestamp_millis().to_string());
        assert_eq!(note.edit_path(), format!("/note/{}/edit", note.id));
        let ids: Vec<_> = repo.snapshot().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![note.id.clone(), "1".to_string()]);
        assert_eq!(notifier.last().unwrap().title, "Note created");
    }

    #[test]
    fn given_same_instant_when_creating_two_notes_then_ids_differ() {
        // Arrange
        let repo = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(repo.clone(), RecordingNotifier::new());

        // Act
        let first = editor.create_note_at("First", now()).unwrap();
        let second = editor.create_note_at("Second", now()).unwrap();

        // Assert
        assert_ne!(first.id, second.id);
        assert_eq!(second.id, (now().timestamp_millis() + 1).to_string());
        let mut lookup = repo.clone();
        assert_eq!(lookup.get_note(&first.id).unwrap().title, "First");
        assert_eq!(lookup.get_note(&second.id).unwrap().title, "Second");
    }

    #[test]
    fn given_taken_timestamp_id_when_saving_new_draft_then_picks_next_free_id() {
        let taken = now().timestamp_millis().to_string();
        let repo = MockNoteRepository::builder()
            .with_note(Note::new("Occupant").with_id(taken.clone()))
            .build();
        let mut editor = NoteEditor::new(repo.clone(), RecordingNotifier::new());
        let mut draft = NoteDraft::new();
        draft.title = "Draft".to_string();

        let saved = editor.save_at(&draft, now()).unwrap();

        assert_ne!(saved.id, taken);
        assert_eq!(repo.snapshot().len(), 2);
    }

    #[test]
    fn given_draft_when_adding_tags_then_trims_and_deduplicates() {
        let mut draft = NoteDraft::new();

        assert!(draft.add_tag(" work "));
        assert!(!draft.add_tag("work"));
        assert!(!draft.add_tag("   "));
        assert!(draft.add_tag("ideas"));

        assert_eq!(draft.tags, vec!["work", "ideas"]);
    }

    #[test]
    fn given_draft_when_removing_tag_then_drops_it() {
        let mut draft = NoteDraft::new();
        draft.add_tag("a");
        draft.add_tag("b");

        assert!(draft.remove_tag("a"));
        assert!(!draft.remove_tag("missing"));
        assert_eq!(draft.tags, vec!["b"]);
    }

    #[test]
    fn given_existing_note_when_saving_draft_then_updates_fields_and_timestamp() {
        // Arrange
        let original = Note::new_at("Old", now() - chrono::Duration::days(1)).with_id("7");
        let repo = MockNoteRepository::builder().with_note(original).build();
        let notifier = RecordingNotifier::new();
        let mut editor = NoteEditor::new(repo.clone(), notifier.clone());
        let mut draft = editor.load_draft(Some("7")).unwrap();
        draft.title = "New".to_string();
        draft.content = "# Body".to_string();
        draft.add_tag("edited");

        // Act
        let saved = editor.save_at(&draft, now()).unwrap();

        // Assert
        assert_eq!(saved.id, "7");
        assert_eq!(saved.title, "New");
        assert_eq!(saved.tags, vec!["edited"]);
        assert_eq!(saved.updated_at, now());
        assert_eq!(repo.snapshot()[0].content, "# Body");
        assert_eq!(notifier.last().unwrap().title, "Note saved");
    }

    #[test]
    fn given_new_draft_when_saving_then_inserts_note() {
        let repo = MockNoteRepository::builder().build();
        let mut editor = NoteEditor::new(repo.clone(), RecordingNotifier::new());
        let mut draft = editor.load_draft(None).unwrap();
        draft.title = "Draft".to_string();

        let saved = editor.save_at(&draft, now()).unwrap();

        assert_eq!(saved.view_path(), format!("/note/{}", now().timestamp_millis()));
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[test]
    fn given_blank_title_when_saving_then_rejects_with_editor_message() {
        let notifier = RecordingNotifier::new();
        let mut editor = NoteEditor::new(MockNoteRepository::builder().build(), notifier.clone());
        let draft = NoteDraft::new();

        let result = editor.save_at(&draft, now());

        assert_eq!(result, Err(DomainError::EmptyTitle));
        assert_eq!(
            notifier.last().unwrap().description,
            "Please enter a title for your note"
        );
    }

    #[test]
    fn given_editor_when_toggling_recording_twice_then_starts_and_stops() {
        let notifier = RecordingNotifier::new();
        let mut editor = NoteEditor::new(MockNoteRepository::builder().build(), notifier.clone());

        assert!(editor.toggle_recording());
        assert!(!editor.toggle_recording());

        let titles: Vec<_> = notifier.notifications().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Recording started", "Recording stopped"]);
    }

    #[test]
    fn given_attachment_kind_when_attaching_then_notifies_with_kind() {
        let notifier = RecordingNotifier::new();
        let editor = NoteEditor::new(MockNoteRepository::builder().build(), notifier.clone());

        editor.attach("video".parse().unwrap());

        let last = notifier.last().unwrap();
        assert_eq!(last.title, "Adding video");
        assert_eq!(last.description, "Select a video to attach to your note");
    }
}
