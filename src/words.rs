//! Word list loading with the built-in fallback.
//!
//! A missing, unreadable or empty word list never stops the game: the seed
//! list is used instead and a warning is logged.

use std::path::Path;

use tracing::{info, warn};

use crate::core::Lexicon;

/// Load `path`, falling back to [`Lexicon::seed`] on any failure.
pub fn load_or_seed(path: &Path) -> Lexicon {
    match Lexicon::load(path) {
        Ok(lexicon) => {
            info!(path = %path.display(), words = lexicon.len(), "lexicon ready");
            lexicon
        }
        Err(err) => {
            let lexicon = Lexicon::seed();
            warn!(error = %err, words = lexicon.len(), "using built-in word list");
            lexicon
        }
    }
}
