// src/domain/mod.rs
pub mod error;
pub mod history;
pub mod note;
pub mod notification;
pub mod profile;
pub mod shared;

pub use error::DomainError;
pub use history::{HistoryEntry, HistoryVersion};
pub use note::{Note, NoteVersion};
pub use notification::{Notification, Severity};
pub use profile::{NotificationSetting, NotificationSettings, Profile};
pub use shared::{Collaborator, Permission, SharedNote};
