//! TUI Word Grid (workspace facade crate).
//!
//! The game logic, input mapping and terminal rendering live in dedicated
//! crates under `crates/`; this package re-exports them as
//! `tui_wordgrid::{core,input,term,types}` and adds the pieces the binary needs
//! on top: settings loading and word list loading.

pub mod config;
pub mod words;

pub use tui_wordgrid_core as core;
pub use tui_wordgrid_input as input;
pub use tui_wordgrid_term as term;
pub use tui_wordgrid_types as types;
