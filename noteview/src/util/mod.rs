// src/util/mod.rs
pub mod testing;
pub mod text;
pub mod time;
