//! The interactive calculation protocol.
//!
//! [`calculate`] writes a prompt before every read, then writes either the
//! result in Rust's default `f64` form or the literal message of the
//! [`CalcError`] that stopped it. Nothing is written after that, not even a
//! newline.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::error::{CalcError, Field};
use crate::operator::Operator;
use crate::request::EquationRequest;
use crate::tokens::{parse_number, Tokens};

/// Prompt written before the equation label is read.
pub const PROMPT_EQUATION: &str = "Type your equation\n";
/// Prompt written before the first operand is read.
pub const PROMPT_FIRST: &str = "Enter first number: ";
/// Prompt written before the operator is read.
pub const PROMPT_OPERATION: &str = "Enter operation(+, -, /, *): ";
/// Prompt written before the second operand is read.
pub const PROMPT_SECOND: &str = "Enter second number: ";

/// Outcome of one calculation: the value written, or the error reported.
pub type Computation = Result<f64, CalcError>;

enum Halt {
    Io(io::Error),
    Calc(CalcError),
}

impl From<io::Error> for Halt {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<CalcError> for Halt {
    fn from(err: CalcError) -> Self {
        Self::Calc(err)
    }
}

/// Run one calculation, reading from `input` and writing to `output`.
///
/// Domain failures (division by zero, unknown operator, malformed or missing
/// operand) are written to `output` and returned as `Ok(Err(_))`. Only I/O
/// failures on either stream produce `Err`.
///
/// An unparsable operand or exhausted input stops the protocol right after
/// the offending read. An unknown operator is reported only after the second
/// operand has been read.
pub fn calculate<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<Computation> {
    let mut tokens = Tokens::new(input);
    let computation = match run(&mut tokens, &mut output) {
        Ok(value) => {
            write!(output, "{value}")?;
            Ok(value)
        }
        Err(Halt::Calc(err)) => {
            write!(output, "{err}")?;
            Err(err)
        }
        Err(Halt::Io(err)) => return Err(err),
    };
    output.flush()?;
    debug!(?computation, "calculation finished");
    Ok(computation)
}

fn run<R: BufRead, W: Write>(tokens: &mut Tokens<R>, output: &mut W) -> Result<f64, Halt> {
    let label = prompt(tokens, output, PROMPT_EQUATION, Field::Label)?;
    let lhs = parse_number(&prompt(tokens, output, PROMPT_FIRST, Field::FirstOperand)?)?;
    let symbol = prompt(tokens, output, PROMPT_OPERATION, Field::Operator)?;
    let rhs = parse_number(&prompt(tokens, output, PROMPT_SECOND, Field::SecondOperand)?)?;

    let op: Operator = symbol.parse()?;
    let request = EquationRequest::new(label, lhs, op, rhs);
    debug!(label = %request.label, lhs, %op, rhs, "evaluating");
    request.evaluate().map_err(Halt::Calc)
}

fn prompt<R: BufRead, W: Write>(
    tokens: &mut Tokens<R>,
    output: &mut W,
    text: &str,
    field: Field,
) -> Result<String, Halt> {
    output.write_all(text.as_bytes())?;
    output.flush()?;
    match tokens.next_token()? {
        Some(token) => Ok(token),
        None => {
            debug!(%field, "input ended");
            Err(Halt::Calc(CalcError::MissingInput(field)))
        }
    }
}
