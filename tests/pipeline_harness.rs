#![allow(unused)]
//! File pipeline integration harness.
//!
//! # What this covers
//!
//! - **Line-per-term files**: each line is one term, whitespace trimmed, blank
//!   lines skipped.
//! - **JSON term files**: picked automatically by extension or forced with
//!   `TermsFormat::Json`; anything but an array of strings is `InvalidInput`.
//! - **Streaming text**: matches spanning a line break are found, because a
//!   newline is an ordinary separator.
//! - **Fatal I/O**: a missing terms or text file, or undecodable text, fails
//!   the whole run with `Error::Io` naming the file.
//!
//! # What this does NOT cover
//!
//! - Argument parsing and process exit codes (see cli_harness)
//!
//! # Running
//!
//! ```sh
//! cargo test --test pipeline_harness
//! ```

mod common;
use common::*;
use termscan::{find_matches, SearchOptions};
use termscan_core::config::TermsFormat;
use termscan_core::{Detection, Error};

fn lagged() -> SearchOptions {
    SearchOptions::default()
}

#[test]
fn newsroom_from_files() {
    let inputs = InputsBuilder::new()
        .terms(TERMS_NEWSROOM)
        .text(TEXT_NEWSROOM)
        .build();

    let map = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap();
    pretty_assertions::assert_eq!(ordered(&map), counts_of(COUNTS_NEWSROOM));
}

#[test]
fn term_lines_are_trimmed() {
    let inputs = InputsBuilder::new()
        .raw_terms("terms.txt", "  more corruption  \r\n\n\tcorruption laws\n")
        .text("more corruption laws passed")
        .build();

    let map = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap();
    assert_counts!(map, [("more corruption", 1), ("corruption laws", 1)]);
}

#[test]
fn matches_span_line_breaks() {
    let inputs = InputsBuilder::new()
        .terms(&["project manager"])
        .text("the project\nmanager is busy")
        .build();

    let map = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap();
    assert_counts!(map, [("project manager", 1)]);
}

#[test]
fn json_terms_by_extension() {
    let inputs = InputsBuilder::new()
        .json_terms(&["a", "a b"])
        .text("a b")
        .build();

    let map = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap();
    assert_counts!(map, [("a", 1), ("a b", 1)]);
}

#[test]
fn json_terms_forced() {
    let inputs = InputsBuilder::new()
        .raw_terms("terms.list", r#"["cat"]"#)
        .text("cat cat cat")
        .build();
    let options = SearchOptions {
        terms_format: TermsFormat::Json,
        ..SearchOptions::default()
    };

    let map = find_matches(inputs.terms(), inputs.text(), options).unwrap();
    assert_counts!(map, [("cat", 3)]);
}

#[test]
fn json_object_terms_are_invalid_input() {
    let inputs = InputsBuilder::new()
        .raw_terms("terms.json", r#"{"terms": ["cat"]}"#)
        .text("cat")
        .build();

    let err = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)), "got {err:?}");
}

#[test]
fn immediate_detection_gives_same_counts() {
    let inputs = InputsBuilder::new()
        .terms(TERMS_NEWSROOM)
        .text(TEXT_NEWSROOM)
        .build();
    let options = SearchOptions {
        detection: Detection::Immediate,
        ..SearchOptions::default()
    };

    let map = find_matches(inputs.terms(), inputs.text(), options).unwrap();
    pretty_assertions::assert_eq!(ordered(&map), counts_of(COUNTS_NEWSROOM));
}

#[test]
fn empty_text_file() {
    let inputs = InputsBuilder::new().terms(&["cat"]).text("").build();
    let map = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap();
    assert_counts!(map, []);
}

#[test]
fn missing_terms_file_is_io_error() {
    let inputs = InputsBuilder::new().terms(&["cat"]).text("cat").build();
    let missing = inputs.dir().join("nope.txt");

    let err = find_matches(&missing, inputs.text(), lagged()).unwrap_err();
    match err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn missing_text_file_is_io_error() {
    let inputs = InputsBuilder::new().terms(&["cat"]).text("cat").build();
    let missing = inputs.dir().join("nope.txt");

    let err = find_matches(inputs.terms(), &missing, lagged()).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn undecodable_text_aborts_without_partial_result() {
    let inputs = InputsBuilder::new()
        .terms(&["cat"])
        .text_bytes(b"cat cat\n\xff\xfe cat\n")
        .build();

    let err = find_matches(inputs.terms(), inputs.text(), lagged()).unwrap_err();
    match err {
        Error::Io { path, .. } => assert_eq!(path, inputs.text()),
        other => panic!("expected Io, got {other:?}"),
    }
}
