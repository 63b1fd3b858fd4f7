// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::{AttachmentKind, SortMode};
use crate::domain::NotificationSetting;
use crate::infrastructure::markdown::RenderMode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Start the session signed out
    #[arg(long, global = true)]
    pub signed_out: bool,

    /// Skip simulated network delays
    #[arg(long, global = true)]
    pub no_delay: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes, newest first unless another order is given
    List {
        /// Case-insensitive term matched against title, content and tags
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Sort order: updated-desc, updated-asc, created-desc, created-asc, title-asc, title-desc
        #[arg(short, long, value_name = "MODE")]
        sort: Option<SortMode>,

        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single note
    View {
        /// Note ID to view
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output note as JSON instead of HTML
        #[arg(long)]
        json: bool,

        /// Open the rendered page in the browser
        #[arg(long)]
        open: bool,

        /// Copy the note's share link
        #[arg(long)]
        copy_link: bool,

        /// Flip the note between public and private first
        #[arg(long)]
        toggle_visibility: bool,
    },

    /// Render a Markdown file to HTML
    Render {
        /// Markdown file to render
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Renderer: compat or commonmark
        #[arg(short, long, value_name = "MODE")]
        mode: Option<RenderMode>,

        /// Open the rendered page in the browser
        #[arg(long)]
        open: bool,
    },

    /// Create a new note
    New {
        /// Title of the note
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// Edit an existing note and save it
    Edit {
        /// Note ID to edit
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(long)]
        title: Option<String>,

        /// Replace the Markdown content
        #[arg(long)]
        content: Option<String>,

        #[arg(long = "add-tag", value_name = "TAG")]
        add_tags: Vec<String>,

        #[arg(long = "remove-tag", value_name = "TAG")]
        remove_tags: Vec<String>,

        /// Attach media: image, video, file or audio
        #[arg(long = "attach", value_name = "KIND")]
        attachments: Vec<AttachmentKind>,

        /// Start and stop dictation during the edit
        #[arg(long)]
        dictate: bool,
    },

    /// Delete a note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Show version history
    History {
        /// Filter by note title
        #[arg(value_name = "SEARCH")]
        search: Option<String>,

        /// Show every version instead of only the latest per note
        #[arg(long)]
        all: bool,
    },

    /// Restore a note to an earlier version
    Restore {
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        #[arg(value_name = "VERSION_ID")]
        version_id: String,
    },

    /// List notes shared with you
    Shared {
        /// Matches title, content, tags or the sharer's name
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Show or update account settings
    Profile {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Flip a notification preference: email-notifications, collaborator-updates, marketing-emails
        #[arg(long, value_name = "SETTING")]
        toggle: Vec<NotificationSetting>,
    },

    /// Write a default config file
    Init,
}
