use arrayvec::ArrayVec;

use crate::game_state::SubmitOutcome;
use crate::grid::LetterGrid;
use crate::types::{GridPos, Lights, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS, ROUND_MS};

/// Render-facing copy of a round.
///
/// Views read only from this, never from `GameState` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub grid: LetterGrid,
    pub selection: ArrayVec<GridPos, MAX_CELLS>,
    pub cursor: GridPos,
    /// Letters of the selection as shown on the grid.
    pub current_word: String,
    /// Most recent accepted words first.
    pub recent_words: Vec<String>,
    pub last_outcome: Option<SubmitOutcome>,
    /// Zero-based; restarts count up.
    pub round_id: u32,
    /// Seed the grid was rolled from.
    pub seed: u32,
    pub score: u32,
    pub words: u32,
    pub remaining_ms: u32,
    pub dial: f32,
    pub lights: Lights,
    pub paused: bool,
    pub round_over: bool,
}

impl GameSnapshot {
    pub fn is_selected(&self, pos: GridPos) -> bool {
        self.selection.contains(&pos)
    }

    pub fn playable(&self) -> bool {
        !self.round_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: LetterGrid::new(DEFAULT_ROWS, DEFAULT_COLS),
            selection: ArrayVec::new(),
            cursor: GridPos::default(),
            current_word: String::new(),
            recent_words: Vec::new(),
            last_outcome: None,
            round_id: 0,
            seed: 0,
            score: 0,
            words: 0,
            remaining_ms: ROUND_MS,
            dial: 0.0,
            lights: Lights::Idle,
            paused: false,
            round_over: false,
        }
    }
}
