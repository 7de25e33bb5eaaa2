//! Application configuration from CLI flags and environment.

use clap::Parser;
use fibcalc_cli::OutputFormat;

/// Print the first N Fibonacci numbers, starting from F(0).
#[derive(Parser, Debug)]
#[command(name = "fibocli", version, about)]
pub struct FibConfig {
    /// Number of terms to print.
    #[arg(
        value_name = "N",
        env = "FIBOCLI_N",
        value_parser = parse_count,
        required_unless_present = "completion"
    )]
    pub n: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Fail instead of wrapping when a term does not fit in a u64.
    #[arg(long)]
    pub checked: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl FibConfig {
    /// Parse CLI arguments, exiting with a usage error on failure.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Interactive calculator: reads an equation label, two numbers and an
/// operation from stdin.
#[derive(Parser, Debug)]
#[command(name = "calculator", version, about)]
pub struct CalcConfig {
    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl CalcConfig {
    /// Parse CLI arguments, exiting with a usage error on failure.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse a term count. Surrounding whitespace is ignored; signs, fractions
/// and trailing garbage are not.
fn parse_count(s: &str) -> Result<usize, String> {
    s.trim().parse().map_err(|_| format!("Invalid N: {s}"))
}
