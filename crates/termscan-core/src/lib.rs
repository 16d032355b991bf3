//! termscan-core: token-level term matching.
//!
//! This crate holds the search core: the tokenizer contract, the immutable
//! token trie, the streaming match engine and the frequency aggregator, plus
//! the shared error and config types.
//!
//! # Architecture
//!
//! ```text
//! terms ──► Tokenizer ──► TermTrie
//!                            │
//! text  ──► Tokenizer ──► Matcher ──► match events ──► FrequencyMap
//! ```
//!
//! Everything runs synchronously on the caller's thread. A built
//! [`TermTrie`] is immutable and may be shared by concurrent searches.

pub mod config;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod tokenizer;
pub mod trie;
pub mod types;

pub use engine::{count, count_with, search, search_with, try_count_with, Matcher};
pub use error::{Error, Result};
pub use frequency::FrequencyMap;
pub use tokenizer::{tokenize, Tokenizer};
pub use trie::{NodeId, TermTrie, TermTrieBuilder};
pub use types::{join_tokens, Detection, MatchEvent, Token};
