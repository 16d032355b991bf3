//! Static term lists and texts used across harnesses.

/// Terms exercising nesting ("project" / "project manager"), overlap
/// ("more corruption" / "corruption laws") and apostrophes.
pub const TERMS_NEWSROOM: &[&str] = &[
    "project",
    "project manager",
    "more corruption",
    "corruption laws",
    "let the dogs out",
    "dog",
    "dog's homework",
    "",
    "   ",
];

/// Text matching [`TERMS_NEWSROOM`].
pub const TEXT_NEWSROOM: &str = "\
The project manager is busy. Critics want more corruption laws passed,
not more corruption. Who let the dogs out? The dog ate my dog's homework,
so the project slipped again: another project, another dog.
";

/// Expected counts for [`TERMS_NEWSROOM`] over [`TEXT_NEWSROOM`].
pub const COUNTS_NEWSROOM: &[(&str, i64)] = &[
    ("project", 3),
    ("project manager", 1),
    ("more corruption", 2),
    ("corruption laws", 1),
    ("let the dogs out", 1),
    ("dog", 2),
    ("dog's homework", 1),
];

/// A small vocabulary for property tests. Kept tiny so random terms and texts
/// collide often.
pub const VOCABULARY: &[&str] = &["a", "b", "c", "dog", "dog's"];

/// Build a text of `n` repetitions of `phrase`, separated by punctuation.
pub fn repeated_text(phrase: &str, n: usize) -> String {
    vec![phrase; n].join(", ")
}
