//! Term list loading.
//!
//! A terms file is either one term per line (surrounding whitespace trimmed,
//! blank lines kept and later skipped by the trie builder) or a JSON array of
//! strings. [`TermsFormat::Auto`] picks JSON for `.json` files.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use termscan_core::config::TermsFormat;
use termscan_core::{Error, Result, TermTrie, Tokenizer};

/// Resolve [`TermsFormat::Auto`] against the file extension.
pub fn resolve_format(path: &Path, format: TermsFormat) -> TermsFormat {
    match format {
        TermsFormat::Auto => {
            let is_json = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
            if is_json {
                TermsFormat::Json
            } else {
                TermsFormat::Lines
            }
        }
        other => other,
    }
}

/// Read the raw term strings from `path`, in file order.
pub fn read_terms(path: &Path, format: TermsFormat) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let terms = match resolve_format(path, format) {
        TermsFormat::Json => parse_json(BufReader::new(file), path)?,
        _ => parse_lines(BufReader::new(file), path)?,
    };
    tracing::debug!(path = %path.display(), terms = terms.len(), "terms loaded");
    Ok(terms)
}

/// Load `path` and build the trie from it.
pub fn load_trie(path: &Path, format: TermsFormat, tokenizer: &Tokenizer) -> Result<TermTrie> {
    let terms = read_terms(path, format)?;
    Ok(TermTrie::build_with(tokenizer, &terms))
}

/// One term per line, trimmed.
pub fn parse_lines<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| {
            line.map(|l| l.trim().to_string())
                .map_err(|e| Error::io(path, e))
        })
        .collect()
}

/// A JSON array of strings. Anything else is [`Error::InvalidInput`].
pub fn parse_json<R: Read>(reader: R, path: &Path) -> Result<Vec<String>> {
    let value: serde_json::Value = serde_json::from_reader(reader).map_err(|e| {
        if e.is_io() {
            Error::io(path, e.into())
        } else {
            Error::invalid_input(format!("{}: {e}", path.display()))
        }
    })?;

    let serde_json::Value::Array(items) = value else {
        return Err(Error::invalid_input(format!(
            "{}: terms must be a JSON array of strings",
            path.display()
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            serde_json::Value::String(term) => Ok(term),
            other => Err(Error::invalid_input(format!(
                "{}: term #{i} is not a string: {other}",
                path.display()
            ))),
        })
        .collect()
}
