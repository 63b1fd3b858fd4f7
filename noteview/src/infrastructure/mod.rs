// src/infrastructure/mod.rs
pub mod config;
pub mod fixtures;
pub mod latency;
pub mod markdown;
pub mod memory;
pub mod notifier;
pub mod renderer;

pub use config::Config;
pub use memory::InMemoryNoteRepository;
pub use notifier::{MemoryClipboard, RecordingNotifier};
