//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` event types. It maps key events into
//! [`crate::types::GameAction`]. Pointer input needs the on-screen layout, so
//! tile hit-testing lives with the view.

pub mod map;

pub use tui_wordgrid_types as types;

pub use map::{handle_key_event, should_quit};
