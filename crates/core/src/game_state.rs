//! Game state module - one round of play
//!
//! This module ties together the grid, the selection path, the lexicon and the
//! scorer. It owns everything that changes during a round: the selection being
//! built, the set of words already submitted, the counters and the round timer.
//!
//! A submit runs the full word pipeline:
//! validate path → assemble word → lexicon membership → not already submitted
//! → score → record. Any rejection clears the selection and is reported as a
//! [`SubmitOutcome`]; nothing here is an error.

use std::collections::HashSet;

use arrayvec::ArrayVec;
use tracing::{debug, info};

use crate::grid::{path_to_word, LetterGrid};
use crate::lexicon::Lexicon;
use crate::path::{can_extend, is_valid_path};
use crate::rng::LetterRoller;
use crate::scoring::score_word;
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// How many recent words a snapshot carries for display
pub const RECENT_WORDS: usize = 8;

/// Round parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub rows: u8,
    pub cols: u8,
    pub round_ms: u32,
    pub warn_ms: u32,
    pub seed: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            round_ms: ROUND_MS,
            warn_ms: WARN_MS,
            seed: 1,
        }
    }
}

impl RoundConfig {
    /// Clamp every field into its supported range.
    ///
    /// Grid dimensions land in `1..=MAX_GRID_DIM`, the round lasts at least one
    /// tick and the warning threshold never exceeds the round length.
    pub fn normalized(self) -> Self {
        let round_ms = self.round_ms.max(TICK_MS);
        Self {
            rows: self.rows.clamp(1, MAX_GRID_DIM),
            cols: self.cols.clamp(1, MAX_GRID_DIM),
            round_ms,
            warn_ms: self.warn_ms.min(round_ms),
            seed: self.seed,
        }
    }
}

/// Result of submitting the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing was selected, or the round is paused or over; the round is unchanged
    Empty,
    /// The selection is not a legal path on this grid
    InvalidPath,
    /// The spelled word is not in the lexicon
    UnknownWord { word: String },
    /// The word was already accepted earlier this round
    AlreadyFound { word: String },
    /// The word was recorded
    Accepted { word: String, points: u32 },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }

    pub fn points(&self) -> u32 {
        match self {
            SubmitOutcome::Accepted { points, .. } => *points,
            _ => 0,
        }
    }
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    config: RoundConfig,
    grid: LetterGrid,
    roller: LetterRoller,
    /// Monotonic round id (increments on restart).
    round_id: u32,
    /// Seed the current grid was rolled from.
    round_seed: u32,
    selection: ArrayVec<GridPos, MAX_CELLS>,
    cursor: GridPos,
    /// Lowercased words accepted this round, for duplicate rejection.
    submitted: HashSet<String>,
    /// Accepted words in submission order.
    found: Vec<String>,
    last_outcome: Option<SubmitOutcome>,
    score: u32,
    words: u32,
    elapsed_ms: u32,
    /// Time spent in the end-of-round flash.
    flash_ms: u32,
    running: bool,
    paused: bool,
    warned: bool,
}

impl GameState {
    /// Create a round with a freshly rolled grid
    pub fn new(config: RoundConfig) -> Self {
        let config = config.normalized();
        let mut roller = LetterRoller::new(config.seed);
        let grid = LetterGrid::roll(config.rows, config.cols, &mut roller);
        Self::build(config, grid, roller)
    }

    /// Create a round over a fixed grid (the grid's dimensions win over `config`)
    pub fn with_grid(config: RoundConfig, grid: LetterGrid) -> Self {
        let config = RoundConfig {
            rows: grid.rows(),
            cols: grid.cols(),
            ..config
        }
        .normalized();
        let roller = LetterRoller::new(config.seed);
        Self::build(config, grid, roller)
    }

    fn build(config: RoundConfig, grid: LetterGrid, roller: LetterRoller) -> Self {
        info!(
            rows = config.rows,
            cols = config.cols,
            round_ms = config.round_ms,
            seed = config.seed,
            "round started"
        );
        Self {
            config,
            grid,
            roller,
            round_id: 0,
            round_seed: config.seed,
            selection: ArrayVec::new(),
            cursor: GridPos::default(),
            submitted: HashSet::new(),
            found: Vec::new(),
            last_outcome: None,
            score: 0,
            words: 0,
            elapsed_ms: 0,
            flash_ms: 0,
            running: true,
            paused: false,
            warned: false,
        }
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    pub fn seed(&self) -> u32 {
        self.round_seed
    }

    pub fn selection(&self) -> &[GridPos] {
        &self.selection
    }

    pub fn cursor(&self) -> GridPos {
        self.cursor
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of accepted words this round
    pub fn words(&self) -> u32 {
        self.words
    }

    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    pub fn last_outcome(&self) -> Option<&SubmitOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn round_over(&self) -> bool {
        !self.running
    }

    /// Selection and submit are only accepted while the clock runs
    pub fn playable(&self) -> bool {
        self.running && !self.paused
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn remaining_ms(&self) -> u32 {
        self.config.round_ms.saturating_sub(self.elapsed_ms)
    }

    /// Dial position as a fraction of a full turn, in `[0, 1)`.
    ///
    /// The dial rests at 0 once the round is over.
    pub fn dial_fraction(&self) -> f32 {
        if !self.running {
            return 0.0;
        }
        (self.elapsed_ms % self.config.round_ms) as f32 / self.config.round_ms as f32
    }

    pub fn lights(&self) -> Lights {
        if self.running {
            return if self.warned {
                Lights::Warning
            } else {
                Lights::Idle
            };
        }

        let step = self.flash_ms / END_FLASH_STEP_MS;
        if step < END_FLASH_STEPS as u32 {
            Lights::Flash { red: step % 2 == 0 }
        } else {
            Lights::Off
        }
    }

    /// Word spelled by the current selection, as shown on the grid
    pub fn current_word(&self) -> String {
        path_to_word(&self.selection, &self.grid)
    }

    /// Activate a tile.
    ///
    /// - An unselected tile is appended when the path stays legal.
    /// - A selected tile truncates the path at that tile (it and every tile
    ///   after it are dropped).
    ///
    /// Ignored while paused or after time is up. Returns true if the selection
    /// changed.
    pub fn activate(&mut self, pos: GridPos) -> bool {
        if !self.playable() || !self.grid.contains(pos) {
            return false;
        }

        if let Some(idx) = self.selection.iter().position(|&p| p == pos) {
            self.selection.truncate(idx);
            return true;
        }

        if !can_extend(&self.selection, pos) {
            return false;
        }
        self.selection.try_push(pos).is_ok()
    }

    /// Move the cursor one tile, stopping at the grid edge
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();
        let row = self.cursor.row as i16 + dr as i16;
        let col = self.cursor.col as i16 + dc as i16;
        if row < 0 || col < 0 || row >= self.grid.rows() as i16 || col >= self.grid.cols() as i16 {
            return false;
        }
        self.cursor = GridPos::new(row as u8, col as u8);
        true
    }

    /// Drop the current selection
    pub fn clear_selection(&mut self) -> bool {
        let had_any = !self.selection.is_empty();
        self.selection.clear();
        had_any
    }

    /// Submit the current selection as a word.
    ///
    /// An empty selection, a paused round or a finished round is a no-op.
    /// Otherwise the selection is always cleared, whether the word is accepted
    /// or not.
    pub fn submit(&mut self, lexicon: &Lexicon) -> SubmitOutcome {
        if !self.playable() || self.selection.is_empty() {
            return SubmitOutcome::Empty;
        }

        let outcome = self.evaluate(lexicon);
        self.selection.clear();

        if let SubmitOutcome::Accepted { word, points } = &outcome {
            self.submitted.insert(word.clone());
            self.found.push(word.clone());
            self.score = self.score.saturating_add(*points);
            self.words = self.words.saturating_add(1);
        }

        debug!(?outcome, score = self.score, words = self.words, "submit");
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    fn evaluate(&self, lexicon: &Lexicon) -> SubmitOutcome {
        let path = self.selection.as_slice();
        if !is_valid_path(path) || !path.iter().all(|&p| self.grid.contains(p)) {
            return SubmitOutcome::InvalidPath;
        }

        let word = path_to_word(path, &self.grid).to_lowercase();
        if !lexicon.has_word(&word) {
            return SubmitOutcome::UnknownWord { word };
        }
        if self.submitted.contains(&word) {
            return SubmitOutcome::AlreadyFound { word };
        }

        let points = score_word(&word);
        SubmitOutcome::Accepted { word, points }
    }

    /// Advance the round clock.
    ///
    /// Returns true if anything visible changed (clock, lights or flash).
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }

        if !self.running {
            let flash_total = END_FLASH_STEP_MS * END_FLASH_STEPS as u32;
            if self.flash_ms >= flash_total {
                return false;
            }
            self.flash_ms = self.flash_ms.saturating_add(elapsed_ms).min(flash_total);
            return true;
        }

        self.elapsed_ms = self
            .elapsed_ms
            .saturating_add(elapsed_ms)
            .min(self.config.round_ms);

        let remaining = self.remaining_ms();
        if !self.warned && remaining > 0 && remaining <= self.config.warn_ms {
            self.warned = true;
            debug!(remaining_ms = remaining, "round warning");
        }

        if self.elapsed_ms >= self.config.round_ms {
            self.running = false;
            self.flash_ms = 0;
            self.selection.clear();
            info!(
                round_id = self.round_id,
                score = self.score,
                words = self.words,
                "round over"
            );
        }

        true
    }

    /// Roll a new grid and reset every counter.
    ///
    /// The next grid continues the current RNG sequence, so a whole session is
    /// reproducible from the first seed.
    pub fn restart(&mut self) {
        let seed = self.roller.seed();
        let mut roller = LetterRoller::new(seed);
        let grid = LetterGrid::roll(self.config.rows, self.config.cols, &mut roller);
        let next_round = self.round_id.wrapping_add(1);

        *self = Self::build(
            RoundConfig {
                seed,
                ..self.config
            },
            grid,
            roller,
        );
        self.round_id = next_round;
    }

    /// Apply a game action.
    ///
    /// Returns true if the action changed the round.
    pub fn apply_action(&mut self, action: GameAction, lexicon: &Lexicon) -> bool {
        match action {
            GameAction::Pause => {
                if !self.running {
                    return false;
                }
                self.paused = !self.paused;
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::MoveCursor(direction) => self.move_cursor(direction),
            _ if !self.playable() => false,
            GameAction::Activate => self.activate(self.cursor),
            GameAction::ActivateAt(pos) => {
                if self.grid.contains(pos) {
                    self.cursor = pos;
                }
                self.activate(pos)
            }
            GameAction::Submit => self.submit(lexicon) != SubmitOutcome::Empty,
            GameAction::Clear => self.clear_selection(),
        }
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid;
        out.selection.clear();
        out.selection.extend(self.selection.iter().copied());
        out.cursor = self.cursor;
        out.current_word.clear();
        out.current_word
            .extend(self.selection.iter().filter_map(|&p| self.grid.get(p)));
        out.recent_words.clear();
        out.recent_words
            .extend(self.found.iter().rev().take(RECENT_WORDS).cloned());
        out.last_outcome = self.last_outcome.clone();
        out.round_id = self.round_id;
        out.seed = self.round_seed;
        out.score = self.score;
        out.words = self.words;
        out.remaining_ms = self.remaining_ms();
        out.dial = self.dial_fraction();
        out.lights = self.lights();
        out.paused = self.paused;
        out.round_over = !self.running;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> GridPos {
        GridPos::new(row, col)
    }

    fn cat_round() -> (GameState, Lexicon) {
        let grid = LetterGrid::from_rows(&["CAT", "XSX", "XXX"]).unwrap();
        let state = GameState::with_grid(RoundConfig::default(), grid);
        (state, Lexicon::from_words(["cat", "cats"]))
    }

    fn select(state: &mut GameState, path: &[GridPos]) {
        for &pos in path {
            assert!(state.activate(pos), "activate {:?}", pos);
        }
    }

    #[test]
    fn test_accepts_word_and_scores() {
        let (mut state, lex) = cat_round();
        select(&mut state, &[p(0, 0), p(0, 1), p(0, 2)]);
        assert_eq!(state.current_word(), "CAT");

        let outcome = state.submit(&lex);
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "cat".into(),
                points: 1
            }
        );
        assert_eq!(state.score(), 1);
        assert_eq!(state.words(), 1);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_duplicate_rejected_by_round_not_lexicon() {
        let (mut state, lex) = cat_round();
        let path = [p(0, 0), p(0, 1), p(0, 2)];

        select(&mut state, &path);
        assert!(state.submit(&lex).is_accepted());

        select(&mut state, &path);
        assert_eq!(
            state.submit(&lex),
            SubmitOutcome::AlreadyFound { word: "cat".into() }
        );
        assert!(lex.has_word("cat"));
        assert_eq!(state.score(), 1);
        assert_eq!(state.words(), 1);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_unknown_word_clears_selection() {
        let (mut state, lex) = cat_round();
        select(&mut state, &[p(0, 1), p(0, 2)]);
        assert_eq!(
            state.submit(&lex),
            SubmitOutcome::UnknownWord { word: "at".into() }
        );
        assert!(state.selection().is_empty());
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_empty_submit_is_noop() {
        let (mut state, lex) = cat_round();
        assert_eq!(state.submit(&lex), SubmitOutcome::Empty);
        assert!(state.last_outcome().is_none());
    }

    #[test]
    fn test_activate_rejects_non_adjacent_tile() {
        let (mut state, _) = cat_round();
        assert!(state.activate(p(0, 0)));
        assert!(!state.activate(p(2, 2)));
        assert!(!state.activate(p(9, 9)));
        assert_eq!(state.selection(), &[p(0, 0)]);
    }

    #[test]
    fn test_activate_selected_tile_truncates() {
        let (mut state, _) = cat_round();
        select(&mut state, &[p(0, 0), p(0, 1), p(1, 1), p(0, 2)]);

        assert!(state.activate(p(0, 2)));
        assert_eq!(state.selection(), &[p(0, 0), p(0, 1), p(1, 1)]);

        assert!(state.activate(p(0, 1)));
        assert_eq!(state.selection(), &[p(0, 0)]);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let (mut state, _) = cat_round();
        assert!(!state.move_cursor(Direction::Up));
        assert!(!state.move_cursor(Direction::Left));
        assert!(state.move_cursor(Direction::Right));
        assert!(state.move_cursor(Direction::Right));
        assert!(!state.move_cursor(Direction::Right));
        assert_eq!(state.cursor(), p(0, 2));
    }

    #[test]
    fn test_warning_then_round_over_then_flash() {
        let config = RoundConfig {
            round_ms: 1000,
            warn_ms: 200,
            ..RoundConfig::default()
        };
        let mut state = GameState::new(config);
        assert_eq!(state.lights(), Lights::Idle);

        state.tick(700);
        assert_eq!(state.lights(), Lights::Idle);
        assert!((state.dial_fraction() - 0.7).abs() < 1e-6);

        state.tick(100);
        assert_eq!(state.lights(), Lights::Warning);
        assert_eq!(state.remaining_ms(), 200);

        state.activate(p(0, 0));
        state.tick(200);
        assert!(state.round_over());
        assert_eq!(state.remaining_ms(), 0);
        assert_eq!(state.dial_fraction(), 0.0);
        assert!(state.selection().is_empty());

        assert_eq!(state.lights(), Lights::Flash { red: true });
        state.tick(END_FLASH_STEP_MS);
        assert_eq!(state.lights(), Lights::Flash { red: false });
        state.tick(END_FLASH_STEP_MS * 3);
        assert_eq!(state.lights(), Lights::Off);
        assert!(!state.tick(TICK_MS));
    }

    #[test]
    fn test_pause_freezes_clock_and_input() {
        let (mut state, lex) = cat_round();
        assert!(state.apply_action(GameAction::Pause, &lex));
        assert!(!state.tick(500));
        assert_eq!(state.elapsed_ms(), 0);
        assert!(!state.apply_action(GameAction::Activate, &lex));

        assert!(state.apply_action(GameAction::Pause, &lex));
        assert!(state.apply_action(GameAction::Activate, &lex));
        assert_eq!(state.selection(), &[p(0, 0)]);
    }

    #[test]
    fn test_round_over_ignores_selection() {
        let config = RoundConfig {
            round_ms: 100,
            warn_ms: 10,
            ..RoundConfig::default()
        };
        let lex = Lexicon::seed();
        let mut state = GameState::new(config);
        state.tick(100);
        assert!(!state.apply_action(GameAction::Activate, &lex));
        assert!(!state.apply_action(GameAction::Pause, &lex));
    }

    #[test]
    fn test_direct_calls_ignored_while_paused() {
        let (mut state, lex) = cat_round();
        select(&mut state, &[p(0, 0), p(0, 1)]);
        assert!(state.apply_action(GameAction::Pause, &lex));

        assert!(!state.activate(p(0, 2)));
        assert_eq!(state.submit(&lex), SubmitOutcome::Empty);
        assert_eq!(state.selection(), &[p(0, 0), p(0, 1)]);
        assert_eq!(state.score(), 0);
        assert_eq!(state.words(), 0);
    }

    #[test]
    fn test_direct_calls_ignored_after_time_up() {
        let grid = LetterGrid::from_rows(&["CAT"]).unwrap();
        let config = RoundConfig {
            round_ms: 100,
            warn_ms: 10,
            ..RoundConfig::default()
        };
        let mut state = GameState::with_grid(config, grid);
        let lex = Lexicon::from_words(["cat"]);
        state.tick(100);
        assert!(!state.playable());

        for col in 0..3 {
            assert!(!state.activate(p(0, col)));
        }
        assert_eq!(state.submit(&lex), SubmitOutcome::Empty);
        assert_eq!(state.score(), 0);
        assert_eq!(state.words(), 0);
        assert!(state.last_outcome().is_none());
    }

    #[test]
    fn test_pointer_activation_moves_cursor() {
        let (mut state, lex) = cat_round();
        assert!(state.apply_action(GameAction::ActivateAt(p(1, 1)), &lex));
        assert_eq!(state.cursor(), p(1, 1));
        assert_eq!(state.selection(), &[p(1, 1)]);
    }

    #[test]
    fn test_restart_resets_and_rerolls() {
        let lex = Lexicon::seed();
        let mut state = GameState::new(RoundConfig::default());
        let first_grid = *state.grid();
        state.tick(5000);
        state.activate(p(0, 0));

        state.apply_action(GameAction::Restart, &lex);
        assert_eq!(state.round_id(), 1);
        assert_eq!(state.elapsed_ms(), 0);
        assert!(state.selection().is_empty());
        assert_eq!(state.score(), 0);
        assert_ne!(state.seed(), 1);
        // Astronomically unlikely for two 25-letter rolls to coincide.
        assert_ne!(*state.grid(), first_grid);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = GameState::new(RoundConfig::default());
        let b = GameState::new(RoundConfig::default());
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_config_normalization() {
        let cfg = RoundConfig {
            rows: 0,
            cols: 40,
            round_ms: 0,
            warn_ms: 5000,
            seed: 9,
        }
        .normalized();
        assert_eq!(cfg.rows, 1);
        assert_eq!(cfg.cols, MAX_GRID_DIM);
        assert_eq!(cfg.round_ms, TICK_MS);
        assert_eq!(cfg.warn_ms, TICK_MS);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let (mut state, lex) = cat_round();
        select(&mut state, &[p(0, 0), p(0, 1), p(0, 2)]);
        state.submit(&lex);
        select(&mut state, &[p(0, 0), p(0, 1)]);

        let snap = state.snapshot();
        assert_eq!(snap.current_word, "CA");
        assert_eq!(snap.selection.as_slice(), &[p(0, 0), p(0, 1)]);
        assert_eq!(snap.recent_words, vec!["cat".to_string()]);
        assert_eq!(snap.score, 1);
        assert_eq!(snap.words, 1);
        assert!(snap.last_outcome.as_ref().unwrap().is_accepted());
        assert!(snap.playable());
    }
}
