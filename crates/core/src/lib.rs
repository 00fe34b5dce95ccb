//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the word rules, round state and letter rolling.
//! It has **zero dependencies** on UI, terminal or input crates, making it:
//!
//! - **Deterministic**: Same seed produces identical grids
//! - **Testable**: Unit tests for every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`lexicon`]: prefix trie for dictionary membership and prefix tests
//! - [`path`]: selection path legality (8-directional adjacency, no revisits)
//! - [`grid`]: letter table and word assembly from a path
//! - [`scoring`]: length-based word points
//! - [`rng`]: seeded weighted letter rolling
//! - [`game_state`]: one round - selection, submitted words, counters, timer
//!
//! # Word Rules
//!
//! - **Adjacency**: consecutive tiles touch horizontally, vertically or diagonally
//! - **No revisits**: a tile is used at most once per word
//! - **Dictionary**: the lowercased word must be in the lexicon
//! - **No repeats**: a word scores once per round
//! - **Scoring**: 3-4 letters = 1, 5 = 2, 6 = 3, 7 = 5, 8+ = 11
//!
//! # Example
//!
//! ```
//! use tui_wordgrid_core::{GameState, LetterGrid, Lexicon, RoundConfig, SubmitOutcome};
//! use tui_wordgrid_types::GridPos;
//!
//! let lexicon = Lexicon::from_words(["cat", "cats"]);
//! let grid = LetterGrid::from_rows(&["CAT", "XXS", "XXX"]).unwrap();
//! let mut game = GameState::with_grid(RoundConfig::default(), grid);
//!
//! for (row, col) in [(0, 0), (0, 1), (0, 2)] {
//!     game.activate(GridPos::new(row, col));
//! }
//! let outcome = game.submit(&lexicon);
//! assert_eq!(outcome, SubmitOutcome::Accepted { word: "cat".into(), points: 1 });
//! assert_eq!(game.score(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed time. A round lasts 180s by default; the warning lights switch on
//! for the last 10s and the round ends with a short flash.

pub mod game_state;
pub mod grid;
pub mod lexicon;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_wordgrid_types as types;

// Re-export commonly used types for convenience
pub use game_state::{GameState, RoundConfig, SubmitOutcome};
pub use grid::{path_to_word, LetterGrid};
pub use lexicon::{Lexicon, LexiconError};
pub use path::{is_adjacent, is_valid_path};
pub use rng::{LetterRoller, SimpleRng};
pub use scoring::{score_for_len, score_word};
pub use snapshot::GameSnapshot;
