//! RNG module - weighted letter rolling
//!
//! Letters are drawn from a weighted distribution string: each draw picks a
//! uniformly random position in the string, so frequent letters (E, A, I)
//! appear more often than rare ones (Q, Z).
//!
//! Uses a simple LCG so a seed reproduces the same grid.

use crate::types::LETTER_DISTRIBUTION;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are better distributed than the low ones.
        (self.next_u32() >> 8) % max.max(1)
    }

    /// Current state, usable as the seed of a follow-up round.
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Draws letters from a weighted distribution
#[derive(Debug, Clone)]
pub struct LetterRoller {
    rng: SimpleRng,
    distribution: &'static [u8],
}

impl LetterRoller {
    /// Create a roller over the default distribution with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            distribution: LETTER_DISTRIBUTION.as_bytes(),
        }
    }

    /// Draw one letter
    pub fn roll(&mut self) -> char {
        let idx = self.rng.next_range(self.distribution.len() as u32) as usize;
        self.distribution[idx] as char
    }

    /// Seed for the next round (continues the sequence deterministically)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}
