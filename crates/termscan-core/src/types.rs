//! Core types for termscan-core.
//!
//! This module defines the value types shared across all components: the
//! normalised [`Token`], the [`MatchEvent`] emitted by the engine, and the
//! [`Detection`] discriminant that selects when a completed match is reported.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// A normalised (lowercased) word unit produced by the tokenizer.
///
/// Equality is exact string equality. `Token` borrows as `str`, so maps keyed
/// by `Token` can be probed with a plain `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wrap an already-normalised word. The tokenizer is the usual producer;
    /// callers constructing tokens by hand are responsible for lowercasing.
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        Self(word.to_string())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Join tokens into the canonical match string: single spaces, no padding.
pub fn join_tokens(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.0.len() + 1).sum());
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&token.0);
    }
    out
}

/// A completed match: the token sequence of a full term found in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchEvent {
    pub tokens: Vec<Token>,
}

impl MatchEvent {
    /// Canonical match string (tokens joined by a single space).
    pub fn text(&self) -> String {
        join_tokens(&self.tokens)
    }

    /// Number of tokens in the matched term.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// When the engine reports a candidate that has reached a terminal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Detection {
    /// Report on the token *after* the match completes, with a final flush at
    /// end of input. Reference behaviour.
    #[default]
    Lagged,
    /// Report as soon as a candidate advances into a terminal node.
    Immediate,
}

impl std::fmt::Display for Detection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Detection::Lagged => write!(f, "lagged"),
            Detection::Immediate => write!(f, "immediate"),
        }
    }
}
