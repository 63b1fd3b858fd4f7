// src/ports/mod.rs
pub mod html;
pub mod notify;

pub use html::HtmlPresenter;
pub use notify::{Clipboard, Notifier};
