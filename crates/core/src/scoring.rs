//! Scoring module - length-based word points
//!
//! | Length | Points |
//! |--------|--------|
//! | 0-2 | 0 |
//! | 3-4 | 1 |
//! | 5 | 2 |
//! | 6 | 3 |
//! | 7 | 5 |
//! | 8+ | 11 |

use crate::types::{LONG_WORD_SCORE, WORD_SCORES};

/// Points for a word of `len` characters.
pub fn score_for_len(len: usize) -> u32 {
    WORD_SCORES.get(len).copied().unwrap_or(LONG_WORD_SCORE)
}

/// Points for `word`, counted in characters rather than bytes.
pub fn score_word(word: &str) -> u32 {
    score_for_len(word.chars().count())
}
