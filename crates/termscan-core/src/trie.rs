//! TermTrie: an immutable prefix tree over token sequences.
//!
//! Edges are labelled with [`Token`]s rather than characters, so a node at
//! depth `d` stands for a `d`-word prefix of some inserted term. Nodes live in
//! a flat arena and refer to their children by [`NodeId`]; traversal is
//! strictly top-down, so there are no parent links and no cycles.
//!
//! Construction goes through [`TermTrieBuilder`], which is consumed by
//! [`TermTrieBuilder::finish`]. Once a [`TermTrie`] exists nothing can mutate
//! it, which is what makes sharing one trie between concurrent searches safe.

use crate::error::{Error, Result};
use crate::tokenizer::Tokenizer;
use crate::types::Token;
use std::collections::HashMap;

/// Stable index of a node inside a [`TermTrie`].
///
/// Only meaningful for the trie that handed it out. An id from a different
/// trie never panics: it resolves to no node, or to an unrelated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<Token, NodeId>,
    /// The root-to-here path spells a complete term.
    terminal: bool,
}

#[derive(Debug, Clone)]
pub struct TermTrie {
    nodes: Vec<TrieNode>,
    terms: usize,
    depth: usize,
}

impl TermTrie {
    /// Build a trie from an ordered list of term strings.
    ///
    /// Each term is tokenized independently. Terms that tokenize to nothing
    /// (blank lines, pure punctuation) are skipped without error, and
    /// inserting the same term twice is a no-op.
    pub fn build<I>(terms: I) -> TermTrie
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::build_with(&Tokenizer::new(), terms)
    }

    /// [`TermTrie::build`] with a caller-supplied tokenizer.
    pub fn build_with<I>(tokenizer: &Tokenizer, terms: I) -> TermTrie
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut builder = TermTrieBuilder::new();
        for term in terms {
            builder.insert_tokens(tokenizer.tokens(term.as_ref()));
        }
        builder.finish()
    }

    /// Build from a dynamically typed terms argument.
    ///
    /// Fails with [`Error::InvalidInput`] unless `value` is an array whose
    /// every element is a string.
    pub fn from_json(value: &serde_json::Value) -> Result<TermTrie> {
        let items = value.as_array().ok_or_else(|| {
            Error::invalid_input(format!(
                "terms must be an array of strings, got {}",
                json_kind(value)
            ))
        })?;

        let terms = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                item.as_str().ok_or_else(|| {
                    Error::invalid_input(format!(
                        "term #{i} must be a string, got {}",
                        json_kind(item)
                    ))
                })
            })
            .collect::<Result<Vec<&str>>>()?;

        Ok(Self::build(terms))
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Follow the edge labelled `token` out of `node`, if there is one.
    ///
    /// `None` as well when `node` is not a node of this trie.
    pub fn child(&self, node: NodeId, token: &str) -> Option<NodeId> {
        self.nodes.get(node.0)?.children.get(token).copied()
    }

    /// `false` for ids that are not nodes of this trie.
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.terminal)
    }

    /// Walk `tokens` from the root.
    pub fn find<'a, I>(&self, tokens: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .try_fold(self.root(), |node, token| self.child(node, token))
    }

    /// Whether `term`, tokenized, was inserted as a complete term.
    pub fn contains(&self, term: &str) -> bool {
        let tokens = Tokenizer::new().tokenize(term);
        if tokens.is_empty() {
            return false;
        }
        self.find(tokens.iter().map(Token::as_str))
            .is_some_and(|node| self.is_terminal(node))
    }

    /// Number of distinct terms (terminal nodes).
    pub fn term_count(&self) -> usize {
        self.terms
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length in tokens of the longest term.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }
}

/// Mutable construction phase of a [`TermTrie`].
#[derive(Debug, Clone)]
pub struct TermTrieBuilder {
    nodes: Vec<TrieNode>,
    terms: usize,
    depth: usize,
}

impl Default for TermTrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TermTrieBuilder {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            terms: 0,
            depth: 0,
        }
    }

    /// Insert one term given as already-normalised tokens.
    ///
    /// Returns `false` when nothing was inserted: either the sequence was
    /// empty or the term was already present.
    pub fn insert_tokens<I>(&mut self, tokens: I) -> bool
    where
        I: IntoIterator<Item = Token>,
    {
        let mut current = NodeId::ROOT;
        let mut len = 0usize;

        for token in tokens {
            let next = match self.nodes[current.0].children.get(token.as_str()) {
                Some(&id) => id,
                None => {
                    let id = NodeId(self.nodes.len());
                    self.nodes.push(TrieNode::default());
                    self.nodes[current.0].children.insert(token, id);
                    id
                }
            };
            current = next;
            len += 1;
        }

        if len == 0 {
            tracing::trace!("skipping term with no tokens");
            return false;
        }

        let node = &mut self.nodes[current.0];
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.terms += 1;
        self.depth = self.depth.max(len);
        true
    }

    /// Tokenize `term` with `tokenizer` and insert it.
    pub fn insert(&mut self, tokenizer: &Tokenizer, term: &str) -> bool {
        self.insert_tokens(tokenizer.tokens(term))
    }

    /// Freeze the trie. No further insertion is possible.
    pub fn finish(self) -> TermTrie {
        tracing::debug!(
            terms = self.terms,
            nodes = self.nodes.len(),
            depth = self.depth,
            "term trie built"
        );
        TermTrie {
            nodes: self.nodes,
            terms: self.terms,
            depth: self.depth,
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
