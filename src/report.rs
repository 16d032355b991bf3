//! Report rendering: prints a [`FrequencyMap`] for humans or machines.

use std::collections::BTreeMap;
use std::io::Write;
use termscan_core::config::OutputFormat;
use termscan_core::FrequencyMap;

/// Write `counts` to `out` in the requested format.
///
/// `Plain` prints `<term>\t<count>` lines, highest count first and ties in
/// key order. `Json` prints one object with keys sorted, followed by a
/// newline. Both orders are deterministic.
pub fn render<W: Write>(counts: &FrequencyMap, format: OutputFormat, mut out: W) -> std::io::Result<()> {
    match format {
        OutputFormat::Plain => {
            for (term, count) in counts.sorted() {
                writeln!(out, "{term}\t{count}")?;
            }
        }
        OutputFormat::Json => {
            let ordered: BTreeMap<&str, i64> = counts.iter().collect();
            serde_json::to_writer(&mut out, &ordered)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
