//! Grid module - the letter table the player selects from
//!
//! The grid is a `rows x cols` rectangle of letters stored in a flat,
//! fixed-capacity array (row-major, `row * cols + col`), so it is `Copy` and
//! never allocates. Dimensions are clamped to `1..=MAX_GRID_DIM`.

use crate::rng::LetterRoller;
use crate::types::{GridPos, MAX_CELLS, MAX_GRID_DIM};

/// Letter table, row-major
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterGrid {
    rows: u8,
    cols: u8,
    cells: [char; MAX_CELLS],
}

impl LetterGrid {
    /// Create a grid filled with blanks (`' '`)
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows: rows.clamp(1, MAX_GRID_DIM),
            cols: cols.clamp(1, MAX_GRID_DIM),
            cells: [' '; MAX_CELLS],
        }
    }

    /// Create a grid from row strings.
    ///
    /// Returns `None` when there are no rows, rows differ in length, or a
    /// dimension exceeds `MAX_GRID_DIM`.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0 || height > MAX_GRID_DIM as usize || width > MAX_GRID_DIM as usize {
            return None;
        }

        let mut grid = Self::new(height as u8, width as u8);
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                grid.set(GridPos::new(r as u8, c as u8), ch);
            }
        }
        Some(grid)
    }

    /// Create a grid and fill every tile from `roller`
    pub fn roll(rows: u8, cols: u8, roller: &mut LetterRoller) -> Self {
        let mut grid = Self::new(rows, cols);
        grid.reroll(roller);
        grid
    }

    /// Replace every letter with a fresh draw
    pub fn reroll(&mut self, roller: &mut LetterRoller) {
        let len = self.len();
        for cell in &mut self.cells[..len] {
            *cell = roller.roll();
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn index(&self, pos: GridPos) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some((pos.row as usize) * (self.cols as usize) + (pos.col as usize))
    }

    /// Check if `pos` lies on the grid
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Letter at `pos`, `None` when out of bounds
    pub fn get(&self, pos: GridPos) -> Option<char> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Set the letter at `pos`. Returns false if out of bounds
    pub fn set(&mut self, pos: GridPos, ch: char) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    /// Iterate `(pos, letter)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, char)> + '_ {
        let cols = self.cols;
        self.cells[..self.len()]
            .iter()
            .enumerate()
            .map(move |(i, &ch)| {
                let pos = GridPos::new((i / cols as usize) as u8, (i % cols as usize) as u8);
                (pos, ch)
            })
    }
}

/// Spell out `path` using the letters of `grid`, in path order.
///
/// Performs no validation and no case normalization; validate the path first.
/// Positions outside the grid contribute no character.
pub fn path_to_word(path: &[GridPos], grid: &LetterGrid) -> String {
    path.iter().filter_map(|&pos| grid.get(pos)).collect()
}
