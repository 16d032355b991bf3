//! Test builders: on-disk inputs and reference results.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// InputsBuilder
// ---------------------------------------------------------------------------

/// Writes a terms file and a text file into a fresh temporary directory.
///
/// ```rust
/// let inputs = InputsBuilder::new()
///     .terms(&["project", "project manager"])
///     .text("the project manager is busy")
///     .build();
/// let counts = termscan::find_matches(inputs.terms(), inputs.text(), Default::default());
/// ```
pub struct InputsBuilder {
    terms_name: String,
    terms_body: String,
    text_body: Vec<u8>,
}

/// Temporary input files. Deleted on drop.
pub struct Inputs {
    dir: TempDir,
    terms: PathBuf,
    text: PathBuf,
}

impl Inputs {
    pub fn terms(&self) -> &Path {
        &self.terms
    }

    pub fn text(&self) -> &Path {
        &self.text
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

impl InputsBuilder {
    pub fn new() -> Self {
        Self {
            terms_name: "terms.txt".to_string(),
            terms_body: String::new(),
            text_body: Vec::new(),
        }
    }

    /// One term per line.
    pub fn terms(mut self, terms: &[&str]) -> Self {
        self.terms_name = "terms.txt".to_string();
        self.terms_body = terms.join("\n");
        self
    }

    /// Terms as a JSON array in `terms.json`.
    pub fn json_terms(mut self, terms: &[&str]) -> Self {
        self.terms_name = "terms.json".to_string();
        self.terms_body = serde_json::to_string(terms).unwrap();
        self
    }

    /// Raw terms file content, under the given file name.
    pub fn raw_terms(mut self, name: &str, body: &str) -> Self {
        self.terms_name = name.to_string();
        self.terms_body = body.to_string();
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text_body = text.as_bytes().to_vec();
        self
    }

    pub fn text_bytes(mut self, bytes: &[u8]) -> Self {
        self.text_body = bytes.to_vec();
        self
    }

    pub fn build(self) -> Inputs {
        let dir = tempfile::tempdir().unwrap();
        let terms = dir.path().join(&self.terms_name);
        let text = dir.path().join("text.txt");
        std::fs::write(&terms, &self.terms_body).unwrap();
        let mut file = std::fs::File::create(&text).unwrap();
        file.write_all(&self.text_body).unwrap();
        Inputs { dir, terms, text }
    }
}

// ---------------------------------------------------------------------------
// Reference results
// ---------------------------------------------------------------------------

/// Expected counts as an ordered map, for readable diffs.
pub fn counts_of(pairs: &[(&str, i64)]) -> BTreeMap<String, i64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

/// Brute-force reference: for every distinct term, count the token windows
/// of `text` equal to it. Terms must already be tokenized.
pub fn brute_force_counts(terms: &[Vec<String>], text: &[String]) -> BTreeMap<String, i64> {
    let mut distinct: Vec<&Vec<String>> = terms.iter().filter(|t| !t.is_empty()).collect();
    distinct.sort();
    distinct.dedup();

    let mut out = BTreeMap::new();
    for term in distinct {
        let hits = text.windows(term.len()).filter(|w| *w == term.as_slice()).count() as i64;
        if hits > 0 {
            out.insert(term.join(" "), hits);
        }
    }
    out
}
