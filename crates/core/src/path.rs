//! Path module - geometric legality of a tile selection
//!
//! A selection path is legal when it is non-empty, never revisits a tile, and
//! every consecutive pair of tiles touches (8-directional, Chebyshev distance 1).
//! Bounds against a concrete grid are not checked here.

use crate::types::GridPos;

/// Check whether two tiles touch horizontally, vertically or diagonally.
///
/// A tile is not adjacent to itself.
#[inline]
pub fn is_adjacent(a: GridPos, b: GridPos) -> bool {
    a != b && a.row.abs_diff(b.row) <= 1 && a.col.abs_diff(b.col) <= 1
}

/// Check whether `path` is a legal selection.
///
/// Revisits are checked against every earlier tile, not just the predecessor.
pub fn is_valid_path(path: &[GridPos]) -> bool {
    if path.is_empty() {
        return false;
    }

    for i in 1..path.len() {
        if !is_adjacent(path[i - 1], path[i]) {
            return false;
        }
        if path[..i].contains(&path[i]) {
            return false;
        }
    }

    true
}

/// Check whether `next` may be appended to an already legal `path`.
pub fn can_extend(path: &[GridPos], next: GridPos) -> bool {
    match path.last() {
        None => true,
        Some(&last) => is_adjacent(last, next) && !path.contains(&next),
    }
}
