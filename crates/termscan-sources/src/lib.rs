//! termscan-sources: the file boundary for termscan.
//!
//! Two kinds of input feed the search core:
//!
//! - a **term list**, loaded eagerly and turned into a [`TermTrie`]
//!   (see [`terms`]), and
//! - a **text stream**, tokenized lazily one buffered chunk at a time so
//!   arbitrarily large files, single-line ones included, are searched without
//!   being held in memory (see [`text`]).
//!
//! Open and read failures surface as [`termscan_core::Error::Io`] carrying the
//! offending path.
//!
//! [`TermTrie`]: termscan_core::TermTrie

pub mod terms;
pub mod text;

pub use terms::{load_trie, read_terms, resolve_format};
pub use text::{open_text, TokenStream};
