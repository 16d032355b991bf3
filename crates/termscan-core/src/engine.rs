//! Match engine: streams tokens through a [`TermTrie`] and reports every
//! occurrence of every term, including nested and overlapping ones.
//!
//! # Algorithm
//!
//! The engine keeps a set of *candidates*: cursors into the trie, each with
//! the tokens it has consumed so far. For every input token `t` a new
//! generation of candidates is built from the previous one:
//!
//! 1. each candidate sitting on a terminal node reports its match (lagged
//!    mode; the match ended on the previous token),
//! 2. each candidate with a child labelled `t` advances into the new
//!    generation, the rest are dropped,
//! 3. if the root has a child labelled `t`, a fresh single-token candidate
//!    joins the new generation.
//!
//! When input runs out, [`Matcher::finish`] flushes candidates still sitting
//! on terminal nodes, which is how a match on the very last token is caught.
//!
//! Because every starting position gets its own candidate, `"project"` and
//! `"project manager"` are both found in `"project manager is busy"`, and
//! `"more corruption"` and `"corruption laws"` are both found in
//! `"more corruption laws"`.
//!
//! Memory is bounded by the active set, which never holds more than one
//! candidate per open term prefix, so input of any length is handled in a
//! single pass.

use crate::frequency::FrequencyMap;
use crate::trie::{NodeId, TermTrie};
use crate::types::{join_tokens, Detection, MatchEvent, Token};

#[derive(Debug, Clone)]
struct Candidate {
    node: NodeId,
    tokens: Vec<Token>,
}

/// Incremental matcher over a borrowed trie.
///
/// Feed tokens one at a time with [`Matcher::feed`] and call
/// [`Matcher::finish`] once the input is exhausted. Completed matches are
/// handed to a sink closure as token slices. A caller may simply stop feeding
/// to abandon a search.
#[derive(Debug)]
pub struct Matcher<'t> {
    trie: &'t TermTrie,
    detection: Detection,
    active: Vec<Candidate>,
    // Previous generation's buffer, kept for its capacity.
    spare: Vec<Candidate>,
    consumed: u64,
    peak_active: usize,
}

impl<'t> Matcher<'t> {
    pub fn new(trie: &'t TermTrie) -> Self {
        Self::with_detection(trie, Detection::default())
    }

    pub fn with_detection(trie: &'t TermTrie, detection: Detection) -> Self {
        Self {
            trie,
            detection,
            active: Vec::new(),
            spare: Vec::new(),
            consumed: 0,
            peak_active: 0,
        }
    }

    pub fn detection(&self) -> Detection {
        self.detection
    }

    /// Number of in-progress candidates.
    pub fn active(&self) -> usize {
        self.active.len()
    }

    /// Number of tokens fed so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Consume one token, reporting any matches it completes (immediate mode)
    /// or that completed on the previous token (lagged mode).
    pub fn feed<F>(&mut self, token: Token, mut sink: F)
    where
        F: FnMut(&[Token]),
    {
        let trie = self.trie;
        let lagged = self.detection == Detection::Lagged;

        let mut next = std::mem::take(&mut self.spare);
        next.clear();

        for mut candidate in self.active.drain(..) {
            if lagged && trie.is_terminal(candidate.node) {
                sink(candidate.tokens.as_slice());
            }
            if let Some(child) = trie.child(candidate.node, token.as_str()) {
                candidate.node = child;
                candidate.tokens.push(token.clone());
                if !lagged && trie.is_terminal(child) {
                    sink(candidate.tokens.as_slice());
                }
                next.push(candidate);
            }
        }

        if let Some(child) = trie.child(trie.root(), token.as_str()) {
            let candidate = Candidate {
                node: child,
                tokens: vec![token],
            };
            if !lagged && trie.is_terminal(child) {
                sink(candidate.tokens.as_slice());
            }
            next.push(candidate);
        }

        self.spare = std::mem::replace(&mut self.active, next);
        self.consumed += 1;
        self.peak_active = self.peak_active.max(self.active.len());
    }

    /// End of input. In lagged mode, report every candidate still sitting on
    /// a terminal node; immediate mode has already reported them.
    pub fn finish<F>(self, mut sink: F)
    where
        F: FnMut(&[Token]),
    {
        if self.detection == Detection::Lagged {
            for candidate in &self.active {
                if self.trie.is_terminal(candidate.node) {
                    sink(candidate.tokens.as_slice());
                }
            }
        }
        tracing::debug!(
            tokens = self.consumed,
            peak_active = self.peak_active,
            detection = %self.detection,
            "search finished"
        );
    }
}

/// Run a full search and collect every completed-match event, in the order
/// the engine reports them.
pub fn search<I>(trie: &TermTrie, tokens: I) -> Vec<MatchEvent>
where
    I: IntoIterator<Item = Token>,
{
    search_with(trie, tokens, Detection::default())
}

pub fn search_with<I>(trie: &TermTrie, tokens: I, detection: Detection) -> Vec<MatchEvent>
where
    I: IntoIterator<Item = Token>,
{
    let mut events = Vec::new();
    let mut matcher = Matcher::with_detection(trie, detection);
    for token in tokens {
        matcher.feed(token, |m| events.push(MatchEvent { tokens: m.to_vec() }));
    }
    matcher.finish(|m| events.push(MatchEvent { tokens: m.to_vec() }));
    events
}

/// Run a full search straight into a [`FrequencyMap`].
pub fn count<I>(trie: &TermTrie, tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = Token>,
{
    count_with(trie, tokens, Detection::default())
}

pub fn count_with<I>(trie: &TermTrie, tokens: I, detection: Detection) -> FrequencyMap
where
    I: IntoIterator<Item = Token>,
{
    let result: Result<FrequencyMap, std::convert::Infallible> =
        try_count_with(trie, tokens.into_iter().map(Ok), detection);
    match result {
        Ok(map) => map,
        Err(never) => match never {},
    }
}

/// Count over a fallible token source. The first error aborts the search and
/// is returned as is; no partial result is produced.
pub fn try_count_with<I, E>(trie: &TermTrie, tokens: I, detection: Detection) -> Result<FrequencyMap, E>
where
    I: IntoIterator<Item = Result<Token, E>>,
{
    let mut counts = FrequencyMap::new();
    let mut matcher = Matcher::with_detection(trie, detection);
    for token in tokens {
        matcher.feed(token?, |m| counts.increment(join_tokens(m)));
    }
    matcher.finish(|m| counts.increment(join_tokens(m)));
    Ok(counts)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
