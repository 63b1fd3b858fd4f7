// src/infrastructure/notifier.rs
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

use crate::domain::{Notification, Severity};
use crate::ports::{Clipboard, Notifier};

/// Logs every notification and keeps it for later display.
///
/// Clones share the same buffer, so a use case can own one handle while the
/// caller inspects another.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    sent: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.sent.borrow().clone()
    }

    pub fn last(&self) -> Option<Notification> {
        self.sent.borrow().last().cloned()
    }

    /// Remove and return everything recorded so far
    pub fn drain(&self) -> Vec<Notification> {
        self.sent.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => info!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
            Severity::Destructive => warn!(
                title = %notification.title,
                description = %notification.description,
                "Notification"
            ),
        }
        self.sent.borrow_mut().push(notification);
    }
}

/// Clipboard that only remembers the last text written to it
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) {
        *self.content.borrow_mut() = Some(text.to_string());
    }
}
