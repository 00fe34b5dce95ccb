//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The letter grid is a small rectangle addressed by `(row, col)`:
//!
//! - **Default**: 5 rows x 5 columns
//! - **Limits**: 1..=8 per dimension (`MAX_GRID_DIM`)
//! - **Origin**: `(0, 0)` is the top-left tile
//!
//! # Round Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `ROUND_MS` | 180000 | Length of one round |
//! | `WARN_MS` | 10000 | Remaining time at which the warning lights switch on |
//! | `END_FLASH_STEP_MS` | 160 | Duration of one end-of-round flash step |
//! | `END_FLASH_STEPS` | 4 | Number of end-of-round flash steps |
//!
//! # Examples
//!
//! ```
//! use tui_wordgrid_types::{Direction, GridPos, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let pos = GridPos::new(1, 2);
//! assert_eq!(pos.row, 1);
//! assert_eq!(pos.col, 2);
//!
//! assert_eq!(Direction::Up.delta(), (-1, 0));
//!
//! assert_eq!(DEFAULT_ROWS, 5);
//! assert_eq!(DEFAULT_COLS, 5);
//! ```

/// Default grid height in tiles
pub const DEFAULT_ROWS: u8 = 5;

/// Default grid width in tiles
pub const DEFAULT_COLS: u8 = 5;

/// Largest supported grid dimension (rows and columns)
pub const MAX_GRID_DIM: u8 = 8;

/// Largest number of tiles on any supported grid (and longest selection path)
pub const MAX_CELLS: usize = (MAX_GRID_DIM as usize) * (MAX_GRID_DIM as usize);

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default round length (3 minutes)
pub const ROUND_MS: u32 = 180_000;

/// Warning lights switch on when this much time remains
pub const WARN_MS: u32 = 10_000;

/// Duration of a single end-of-round flash step
pub const END_FLASH_STEP_MS: u32 = 160;

/// Number of end-of-round flash steps (alternating colors)
pub const END_FLASH_STEPS: u8 = 4;

/// Weighted letter distribution used when rolling a new grid.
///
/// Each character appears proportionally to how often it should land on a tile.
pub const LETTER_DISTRIBUTION: &str =
    "EEEEEEEEEEEEAAAAAAAIIIIIIIONNNNRRRRTTTTTLLLLSSSSUUUUDDGGBBCCMMPPFFHHVVWWYYKJXQZ";

/// Built-in word list used when no external word list can be loaded.
pub const SEED_WORDS: [&str; 6] = ["tree", "clear", "enter", "water", "huis", "boom"];

/// Points awarded per word length.
///
/// Index is the word length; lengths past the end use `LONG_WORD_SCORE`.
pub const WORD_SCORES: [u32; 8] = [0, 0, 0, 1, 1, 2, 3, 5];

/// Points awarded for words of 8 or more letters
pub const LONG_WORD_SCORE: u32 = 11;


/// A tile coordinate on the letter grid
///
/// Both components are unsigned, so negative coordinates cannot be expressed.
/// Bounds against a concrete grid are checked by the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl From<(u8, u8)> for GridPos {
    fn from((row, col): (u8, u8)) -> Self {
        Self { row, col }
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Row/column delta for one step in this direction
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These actions are produced by keyboard and mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the tile cursor one step
    MoveCursor(Direction),
    /// Activate the tile under the cursor
    Activate,
    /// Activate a specific tile (pointer input)
    ActivateAt(GridPos),
    /// Submit the current selection as a word
    Submit,
    /// Drop the current selection
    Clear,
    /// Toggle pause state
    Pause,
    /// Roll a new grid and start a fresh round
    Restart,
}

/// Lights state shown above the grid
///
/// - **Idle**: round running with plenty of time left
/// - **Warning**: the last `WARN_MS` of the round
/// - **Flash**: end-of-round flash; `red` alternates each step
/// - **Off**: round over and the flash has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lights {
    Idle,
    Warning,
    Flash { red: bool },
    Off,
}
