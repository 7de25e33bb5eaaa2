//! Application entry points and dispatch.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use tracing::{debug, info};

use fibcalc_arith::Computation;
use fibcalc_cli::completion::generate_completion;
use fibcalc_cli::write_sequence;
use fibcalc_core::{try_generate, try_generate_wrapping};

use crate::config::{CalcConfig, FibConfig};

/// Run `fibocli`: print the first N Fibonacci numbers to `out`.
pub fn run_fib(config: &FibConfig, out: &mut dyn Write) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = FibConfig::command();
        generate_completion(&mut cmd, shell, out);
        return Ok(());
    }

    let n = config.n.context("missing N")?;
    let seq = if config.checked {
        try_generate(n)?
    } else {
        try_generate_wrapping(n)?
    };
    info!(n, checked = config.checked, "generated sequence");

    write_sequence(out, &seq, config.format).context("writing sequence")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}

/// Run `calculator`: one interactive calculation from `input` to `out`.
///
/// Division by zero and other domain errors are already written to `out`
/// and come back as `Ok(Err(_))`; only I/O failures are `Err`.
pub fn run_calc(
    config: &CalcConfig,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Option<Computation>> {
    if let Some(shell) = config.completion {
        let mut cmd = CalcConfig::command();
        generate_completion(&mut cmd, shell, out);
        return Ok(None);
    }

    let computation = fibcalc_arith::calculate(input, out).context("calculator I/O")?;
    debug!(?computation, "calculator done");
    Ok(Some(computation))
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use fibcalc_arith::CalcError;
    use fibcalc_core::FibError;

    fn fib(args: &[&str]) -> Result<String> {
        let args = std::iter::once("fibocli").chain(args.iter().copied());
        let config = FibConfig::try_parse_from(args)?;
        let mut out = Vec::new();
        run_fib(&config, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn calc(input: &str) -> (Option<Computation>, String) {
        let config = CalcConfig::try_parse_from(["calculator"]).unwrap();
        let mut out = Vec::new();
        let computation = run_calc(&config, &mut input.as_bytes(), &mut out).unwrap();
        (computation, String::from_utf8(out).unwrap())
    }

    #[test]
    fn fib_prints_sequence() {
        assert_eq!(fib(&["6"]).unwrap(), "0 1 1 2 3 5\n");
        assert_eq!(fib(&["1"]).unwrap(), "0\n");
    }

    #[test]
    fn fib_zero_prints_nothing() {
        assert_eq!(fib(&["0"]).unwrap(), "");
    }

    #[test]
    fn fib_json() {
        assert_eq!(fib(&["-f", "json", "4"]).unwrap(), "[0,1,1,2]\n");
    }

    #[test]
    fn fib_checked_overflow() {
        let err = fib(&["--checked", "95"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FibError>(),
            Some(FibError::Overflow { index: 94, .. })
        ));
        assert!(fib(&["--checked", "94"]).is_ok());
    }

    #[test]
    fn fib_unchecked_wraps() {
        let out = fib(&["95"]).unwrap();
        assert!(out.trim_end().ends_with("1293530146158671551"));
    }

    #[test]
    fn fib_unallocatable_n_is_an_error() {
        let n = usize::MAX.to_string();
        let err = fib(&[&n]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FibError>(),
            Some(FibError::Allocation { .. })
        ));
    }

    #[test]
    fn fib_completion() {
        let out = fib(&["--completion", "bash"]).unwrap();
        assert!(out.contains("fibocli"));
    }

    #[test]
    fn calc_reports_domain_errors_as_output() {
        let (computation, out) = calc("eq\n1\n/\n0\n");
        assert_eq!(computation, Some(Err(CalcError::DivisionByZero)));
        assert!(out.ends_with("Error: Division by zero!"));
    }

    #[test]
    fn calc_result() {
        let (computation, out) = calc("eq\n4\n*\n2\n");
        assert_eq!(computation, Some(Ok(8.0)));
        assert!(out.ends_with('8'));
    }
}
