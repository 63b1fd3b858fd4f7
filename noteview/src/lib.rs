// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::application::{
    sign_in_redirect, HistoryBrowser, NoteDeleter, NoteDraft, NoteEditor, NoteLister, NoteViewer,
    ProfileService, RouteGuard, Session, SharedNotes,
};
use crate::cli::args::{Args, Command};
use crate::constants::EXCERPT_CHARS;
use crate::domain::{DomainError, Severity};
use crate::infrastructure::config::{default_config_path, LatencyConfig};
use crate::infrastructure::renderer::ContentRenderer;
use crate::infrastructure::{
    fixtures, Config, InMemoryNoteRepository, MemoryClipboard, RecordingNotifier,
};
use crate::ports::HtmlPresenter;
use crate::util::text::{excerpt, extract_first_line};
use crate::util::time::{format_long, format_short, time_passed};

pub fn run(args: Args) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(args, &mut out)
}

/// Run one command against a fresh working set, writing results to `out`.
///
/// Notifications raised along the way are written after the command output.
pub fn execute<W: Write>(args: Args, out: &mut W) -> Result<()> {
    debug!(?args, "Starting noteview with arguments");

    let config_path = match &args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            path.clone()
        }
        None => default_config_path()?,
    };

    if let Command::Init = args.command {
        Config::create_default(&config_path)?;
        writeln!(out, "Wrote default config to {}", config_path.display())?;
        return Ok(());
    }

    let mut config = Config::load_or_default(&config_path)?;
    if args.no_delay {
        config.latency = LatencyConfig::instant();
    }

    let session = if args.signed_out {
        Session::signed_out()
    } else {
        Session::signed_in(config.profile.email.clone())
    };

    let notifier = RecordingNotifier::new();
    let result = dispatch(&args.command, &config, &session, &notifier, out);
    write_notifications(&notifier, out)?;

    if let Err(err) = &result {
        if let Some(DomainError::Unauthenticated(path)) = err.downcast_ref::<DomainError>() {
            writeln!(out, "Sign in at {}", sign_in_redirect(path))?;
        }
    }
    result
}

fn dispatch<W: Write>(
    command: &Command,
    config: &Config,
    session: &Session,
    notifier: &RecordingNotifier,
    out: &mut W,
) -> Result<()> {
    let guard = RouteGuard::new(notifier.clone());

    match command {
        Command::List { search, sort, json } => {
            guard.check(session, "/notes/all")?;
            let sort = sort.unwrap_or(config.defaults.sort);
            let repository = InMemoryNoteRepository::with_fixtures()?;
            let notes = NoteLister::new(repository).list_notes(search.as_deref(), sort)?;

            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&notes)?)?;
                return Ok(());
            }
            if notes.is_empty() {
                match search {
                    Some(_) => writeln!(out, "No notes found. Try adjusting your search term.")?,
                    None => writeln!(out, "No notes yet. Create your first note to get started.")?,
                }
                return Ok(());
            }
            let presenter = HtmlPresenter::with_mode(config.defaults.render_mode);
            for note in notes {
                let preview = excerpt(&presenter.render_body(&note.content), EXCERPT_CHARS);
                writeln!(
                    out,
                    "{:<4} {:<13} {} [{}]",
                    note.id,
                    format_short(&note.updated_at),
                    note.title,
                    note.tags.join(", ")
                )?;
                if !preview.is_empty() {
                    writeln!(out, "     {preview}")?;
                }
            }
        }

        Command::View {
            note_id,
            json,
            open,
            copy_link,
            toggle_visibility,
        } => {
            guard.check(session, &format!("/note/{note_id}"))?;
            let repository = InMemoryNoteRepository::with_fixtures()?;
            let mut viewer =
                NoteViewer::new(repository, notifier.clone()).with_latency(config.latency.load());

            if *toggle_visibility {
                viewer.toggle_visibility(note_id)?;
            }
            info!(note_id = %note_id, "Viewing note");
            let note = viewer.view_note(note_id)?;

            if *copy_link {
                let clipboard = MemoryClipboard::new();
                viewer.copy_link(&note, &config.server.origin, &clipboard);
                if let Some(link) = clipboard.content() {
                    writeln!(out, "{link}")?;
                }
            }

            if *json {
                writeln!(out, "{}", serde_json::to_string_pretty(&note)?)?;
            } else {
                let html = HtmlPresenter::with_mode(config.defaults.render_mode).render(&note);
                if *open {
                    open_page(&html)?;
                } else if !*copy_link {
                    writeln!(out, "{html}")?;
                }
            }
        }

        Command::Render { path, mode, open } => {
            let markdown = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read markdown file {}", path.display()))?;
            let presenter = HtmlPresenter::with_mode(mode.unwrap_or(config.defaults.render_mode));
            let body = presenter.render_body(&markdown);
            // first line of text names the page; the file name is the fallback
            let mut title = extract_first_line(&body);
            if title.is_empty() {
                title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "Untitled".to_string());
            }
            let html = presenter.render_document(&title, &markdown);

            if *open {
                open_page(&html)?;
            } else {
                writeln!(out, "{html}")?;
            }
        }

        Command::New { title } => {
            guard.check(session, "/dashboard")?;
            let repository = InMemoryNoteRepository::with_fixtures()?;
            let mut editor = NoteEditor::new(repository, notifier.clone());
            let note = editor.create_note(title)?;
            writeln!(out, "{}\t{}", note.id, note.edit_path())?;
        }

        Command::Edit {
            note_id,
            title,
            content,
            add_tags,
            remove_tags,
            attachments,
            dictate,
        } => {
            guard.check(session, &format!("/note/{note_id}/edit"))?;
            let repository = InMemoryNoteRepository::with_fixtures()?;
            let mut editor = NoteEditor::new(repository, notifier.clone())
                .with_latency(config.latency.save());

            let mut draft: NoteDraft = editor.load_draft(Some(note_id))?;
            if let Some(title) = title {
                draft.title = title.clone();
            }
            if let Some(content) = content {
                draft.content = content.clone();
            }
            for tag in add_tags {
                draft.add_tag(tag);
            }
            for tag in remove_tags {
                draft.remove_tag(tag);
            }
            for kind in attachments {
                editor.attach(*kind);
            }
            if *dictate {
                editor.toggle_recording();
                editor.toggle_recording();
            }

            let note = editor.save(&draft)?;
            writeln!(out, "{}\t{}", note.id, note.view_path())?;
        }

        Command::Delete { note_id } => {
            guard.check(session, "/dashboard")?;
            let repository = InMemoryNoteRepository::with_fixtures()?;
            let removed = NoteDeleter::new(repository, notifier.clone()).delete_note(note_id)?;
            writeln!(out, "Deleted {}: {}", removed.id, removed.title)?;
        }

        Command::History { search, all } => {
            guard.check(session, "/notes/history")?;
            let browser = HistoryBrowser::new(fixtures::history_entries()?, notifier.clone());
            let query = search.as_deref().unwrap_or("");
            let now = chrono::Utc::now();

            if *all {
                for entry in browser.all_versions(query) {
                    writeln!(out, "{} (note {})", entry.title, entry.note_id)?;
                    for version in entry.versions.iter().rev() {
                        writeln!(
                            out,
                            "  {:<8} {}  {}",
                            version.id,
                            format_long(&version.timestamp),
                            version.change_description
                        )?;
                    }
                }
            } else {
                for change in browser.recent_changes(query) {
                    writeln!(
                        out,
                        "{:<4} {:<32} {} ({}, {})",
                        change.note_id,
                        change.title,
                        change.latest_version.change_description,
                        time_passed(&change.latest_version.timestamp, &now),
                        change.version_label()
                    )?;
                }
            }
        }

        Command::Restore {
            note_id,
            version_id,
        } => {
            guard.check(session, "/notes/history")?;
            let browser = HistoryBrowser::new(fixtures::history_entries()?, notifier.clone());
            let version = browser.restore(note_id, version_id)?;
            writeln!(out, "{}\t{}", version.id, version.change_description)?;
        }

        Command::Shared { search } => {
            guard.check(session, "/notes/shared")?;
            let shared = SharedNotes::new(fixtures::shared_notes()?);
            for item in shared.search(search.as_deref().unwrap_or("")) {
                writeln!(
                    out,
                    "{:<4} {:<32} shared by {} ({}) [{}]",
                    item.note.id,
                    item.note.title,
                    item.shared_by.name,
                    item.permissions,
                    item.note.tags.join(", ")
                )?;
            }
        }

        Command::Profile {
            name,
            email,
            toggle,
        } => {
            guard.check(session, "/profile")?;
            let mut service = ProfileService::new(config.profile.to_profile(), notifier.clone())
                .with_latency(config.latency.update());

            if name.is_some() || email.is_some() {
                service.update(name.as_deref(), email.as_deref());
            }
            for setting in toggle {
                service.toggle_notification(*setting);
            }
            writeln!(out, "{}", serde_json::to_string_pretty(service.profile())?)?;
        }

        // written in `execute` before any config is loaded
        Command::Init => {}
    }

    Ok(())
}

fn open_page(html: &str) -> Result<()> {
    let mut renderer = ContentRenderer::new();
    let temp_path = renderer.create_temp_file(html)?;
    renderer.open_in_browser(&temp_path)
}

fn write_notifications<W: Write>(notifier: &RecordingNotifier, out: &mut W) -> Result<()> {
    for notification in notifier.drain() {
        let marker = match notification.severity {
            Severity::Default => "*",
            Severity::Destructive => "!",
        };
        writeln!(
            out,
            "{marker} {}: {}",
            notification.title, notification.description
        )?;
    }
    Ok(())
}

#[cfg(test)]
/// must be public to be used from integration tests
mod tests {
    use crate::util::testing;
    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }
}
