//! Configuration types for termscan.
//!
//! [`Config::load`] layers an optional user file over the embedded defaults.
//! The user file is `$XDG_CONFIG_HOME/termscan/config.toml` (falling back to
//! `~/.config/termscan/config.toml`) unless an explicit path is given.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use crate::types::Detection;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
detection = "lagged"

[output]
format = "plain"

[terms]
format = "auto"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub terms: TermsConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub detection: Detection,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// `[terms]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TermsConfig {
    #[serde(default)]
    pub format: TermsFormat,
}

/// How a finished [`FrequencyMap`](crate::FrequencyMap) is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<term>\t<count>` per line, highest count first.
    #[default]
    Plain,
    /// A single JSON object.
    Json,
}

/// How a terms file is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermsFormat {
    /// `json` for `.json` files, `lines` otherwise.
    #[default]
    Auto,
    /// One term per line.
    Lines,
    /// A JSON array of strings.
    Json,
}

impl Config {
    /// Load the default user file (if present) over the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load `path` (if present) over the built-in defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), exists = path.exists(), "loading config");
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("termscan")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
