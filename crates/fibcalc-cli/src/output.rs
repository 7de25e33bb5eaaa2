//! Sequence output formatting.

use std::io::{self, BufWriter, Write};

use clap::ValueEnum;

/// How a Fibonacci sequence is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Space-separated decimal values followed by one newline.
    #[default]
    Text,
    /// A JSON array followed by one newline.
    Json,
}

/// Write a sequence in the given format.
///
/// Values are streamed one at a time through a buffer. In text form an empty
/// sequence writes nothing at all, not even a newline.
pub fn write_sequence(out: &mut dyn Write, seq: &[u64], format: OutputFormat) -> io::Result<()> {
    tracing::debug!(len = seq.len(), ?format, "writing sequence");
    let mut out = BufWriter::new(out);
    match format {
        OutputFormat::Text => {
            let Some((first, rest)) = seq.split_first() else {
                return Ok(());
            };
            write!(out, "{first}")?;
            for value in rest {
                write!(out, " {value}")?;
            }
            writeln!(out)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut out, seq)?;
            writeln!(out)?;
        }
    }
    out.flush()
}
