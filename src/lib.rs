//! termscan: count multi-word term occurrences in large texts.
//!
//! This crate wires the workspace together: it loads a term list and a text
//! file through `termscan-sources`, runs the `termscan-core` match engine in a
//! single streaming pass, and renders the resulting [`FrequencyMap`].
//!
//! # Architecture
//!
//! ```text
//! terms file ──► TermTrie ─┐
//!                          ├──► Matcher ──► FrequencyMap ──► report
//! text file  ──► TokenStream
//! ```

pub mod report;

use std::path::Path;
use termscan_core::config::{Config, TermsFormat};
use termscan_core::{Detection, Result, Tokenizer};

pub use termscan_core::{FrequencyMap, TermTrie};

/// Knobs for a single [`find_matches`] run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub detection: Detection,
    pub terms_format: TermsFormat,
}

impl From<&Config> for SearchOptions {
    fn from(config: &Config) -> Self {
        Self {
            detection: config.search.detection,
            terms_format: config.terms.format,
        }
    }
}

/// Search `text_path` for every term listed in `terms_path`.
///
/// The term file is read in full before the text is opened; the text is then
/// consumed lazily. Any I/O failure aborts the run without a partial result.
pub fn find_matches(terms_path: &Path, text_path: &Path, options: SearchOptions) -> Result<FrequencyMap> {
    let tokenizer = Tokenizer::new();
    let trie = termscan_sources::load_trie(terms_path, options.terms_format, &tokenizer)?;
    if trie.is_empty() {
        tracing::warn!(path = %terms_path.display(), "term list is empty; nothing can match");
    }

    let tokens = termscan_sources::open_text(text_path, tokenizer)?;
    let counts = termscan_core::try_count_with(&trie, tokens, options.detection)?;
    tracing::info!(
        terms = trie.term_count(),
        matched = counts.len(),
        occurrences = counts.total(),
        "search complete"
    );
    Ok(counts)
}
