// src/ports/notify.rs
use crate::domain::Notification;

/// Sink for transient user feedback
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Destination of "copy link" actions
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<T: Clipboard + ?Sized> Clipboard for &T {
    fn write_text(&self, text: &str) {
        (**self).write_text(text)
    }
}
