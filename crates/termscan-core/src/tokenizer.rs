//! Tokenizer: splits raw text into normalised [`Token`]s.
//!
//! A token is a maximal run of word characters (`\w`) and apostrophes,
//! lowercased. Everything else is a separator, so
//! `"The quick-brown fox's toys"` yields `the quick brown fox's toys`.
//!
//! The word pattern is compiled once per process and shared; a [`Tokenizer`]
//! is a handle to it, cheap to create and clone and safe to share between
//! threads.

use crate::types::Token;
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

const WORD_PATTERN: &str = r"[\w']+";

static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(WORD_PATTERN).expect("built-in word pattern must compile"));

#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            word: WORD.clone(),
        }
    }

    /// Byte range of the first word in `text`, unnormalised.
    ///
    /// A word ending exactly at `text.len()` may continue in text that has
    /// not been read yet; stream readers use this to carry it over.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.word.find(text).map(|m| m.range())
    }

    /// Lazily yield the tokens of `text` in order.
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        self.word
            .find_iter(text)
            .map(|m| Token::new(m.as_str().to_lowercase()))
    }

    /// Collect the tokens of `text`.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        self.tokens(text).collect()
    }
}

/// Tokenize `text` with the shared default [`Tokenizer`].
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(text)
}
