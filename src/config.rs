//! Game settings: optional JSON file plus command-line overrides.
//!
//! Every field is optional. Layers are merged with later layers winning
//! (file < command line), then resolved into a [`RoundConfig`] with defaults
//! filled in and out-of-range values clamped.
//!
//! ```json
//! { "rows": 5, "cols": 5, "round_secs": 180, "warn_secs": 10, "seed": 42,
//!   "words": "assets/words.txt" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::RoundConfig;
use crate::types::{MAX_GRID_DIM, ROUND_MS, WARN_MS};

/// Word list used when neither the command line nor the settings file names one.
pub const DEFAULT_WORDS_PATH: &str = "assets/words.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub rows: Option<u8>,
    pub cols: Option<u8>,
    pub round_secs: Option<u32>,
    pub warn_secs: Option<u32>,
    pub seed: Option<u32>,
    pub words: Option<PathBuf>,
}

impl GameConfig {
    /// Read a settings file. Missing or malformed files are errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: GameConfig) -> GameConfig {
        GameConfig {
            rows: other.rows.or(self.rows),
            cols: other.cols.or(self.cols),
            round_secs: other.round_secs.or(self.round_secs),
            warn_secs: other.warn_secs.or(self.warn_secs),
            seed: other.seed.or(self.seed),
            words: other.words.or(self.words),
        }
    }

    pub fn words_path(&self) -> PathBuf {
        self.words
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_WORDS_PATH))
    }

    /// Resolve into round parameters, using `fallback_seed` when no seed is set.
    pub fn round_config(&self, fallback_seed: u32) -> RoundConfig {
        let defaults = RoundConfig::default();
        let requested = RoundConfig {
            rows: self.rows.unwrap_or(defaults.rows),
            cols: self.cols.unwrap_or(defaults.cols),
            round_ms: self
                .round_secs
                .map_or(ROUND_MS, |s| s.saturating_mul(1000)),
            warn_ms: self.warn_secs.map_or(WARN_MS, |s| s.saturating_mul(1000)),
            seed: self.seed.unwrap_or(fallback_seed),
        };

        let resolved = requested.normalized();
        if resolved != requested {
            warn!(
                ?requested,
                ?resolved,
                max_dim = MAX_GRID_DIM,
                "settings out of range, clamped"
            );
        }
        resolved
    }
}
