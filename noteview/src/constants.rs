// src/constants.rs
//
// Application-wide timing constants. Each is the default of a configurable value
// unless stated otherwise.

/// Simulated round-trip of saving a note from the editor.
///
/// Used in: `infrastructure/config.rs` (`[latency] save_ms`)
pub const SAVE_DELAY_MS: u64 = 1000;

/// Simulated round-trip of a profile update.
///
/// Used in: `infrastructure/config.rs` (`[latency] update_ms`)
pub const UPDATE_DELAY_MS: u64 = 1000;

/// Simulated initial load before a note is shown.
///
/// Used in: `infrastructure/config.rs` (`[latency] load_ms`)
pub const LOAD_DELAY_MS: u64 = 300;

/// Delay in milliseconds after launching the browser before the temp page may be removed.
///
/// Not configurable. Without it the temporary directory can be dropped before the
/// browser has read the file.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;

/// Characters of rendered content shown per note in listings.
///
/// Used in: `lib.rs`
pub const EXCERPT_CHARS: usize = 80;
