use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use termscan::{report, SearchOptions};
use termscan_core::config::{Config, OutputFormat, TermsFormat};
use termscan_core::Detection;

#[derive(Parser)]
#[command(name = "termscan", about = "Count term occurrences in a text with a token trie")]
struct Cli {
    /// Terms to look for: one per line, or a JSON array of strings.
    terms: PathBuf,

    /// Text to search.
    text: PathBuf,

    /// Output format (overrides `[output] format`).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// When a completed match is reported (overrides `[search] detection`).
    #[arg(long, value_enum)]
    detection: Option<DetectionArg>,

    /// How to parse the terms file (overrides `[terms] format`).
    #[arg(long, value_enum)]
    terms_format: Option<TermsFormatArg>,

    /// Config file to use instead of ~/.config/termscan/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log at debug level to stderr (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Plain,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum DetectionArg {
    Lagged,
    Immediate,
}

#[derive(Clone, Copy, ValueEnum)]
enum TermsFormatArg {
    Auto,
    Lines,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "warn" })
            }),
        )
        .init();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };

    if let Some(format) = cli.format {
        config.output.format = match format {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        };
    }
    if let Some(detection) = cli.detection {
        config.search.detection = match detection {
            DetectionArg::Lagged => Detection::Lagged,
            DetectionArg::Immediate => Detection::Immediate,
        };
    }
    if let Some(terms_format) = cli.terms_format {
        config.terms.format = match terms_format {
            TermsFormatArg::Auto => TermsFormat::Auto,
            TermsFormatArg::Lines => TermsFormat::Lines,
            TermsFormatArg::Json => TermsFormat::Json,
        };
    }
    tracing::debug!(?config, "effective config");

    let counts = termscan::find_matches(&cli.terms, &cli.text, SearchOptions::from(&config))?;

    let stdout = std::io::stdout();
    report::render(&counts, config.output.format, std::io::BufWriter::new(stdout.lock()))
        .context("writing report")?;
    Ok(())
}
