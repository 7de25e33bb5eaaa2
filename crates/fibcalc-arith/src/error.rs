//! Calculator error types.
//!
//! The `Display` form of every [`CalcError`] is the literal message the
//! engine writes to its output stream.

use std::fmt;

/// Position of a token in the input protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Equation label (read, never interpreted).
    Label,
    /// First operand.
    FirstOperand,
    /// Operator symbol.
    Operator,
    /// Second operand.
    SecondOperand,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Label => "equation label",
            Self::FirstOperand => "first number",
            Self::Operator => "operation",
            Self::SecondOperand => "second number",
        };
        f.write_str(name)
    }
}

/// Domain error reported on the output stream instead of a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// `/` with a second operand exactly equal to zero.
    #[error("Error: Division by zero!")]
    DivisionByZero,

    /// Operator token outside `+ - * /`.
    #[error("Error: Invalid operation!")]
    InvalidOperation(String),

    /// Operand token that is not a finite decimal number.
    #[error("Error: Invalid number!")]
    InvalidNumber(String),

    /// Input ended before the given token was read.
    #[error("Error: Unexpected end of input!")]
    MissingInput(Field),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_literal() {
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Error: Division by zero!"
        );
        assert_eq!(
            CalcError::InvalidOperation("%".into()).to_string(),
            "Error: Invalid operation!"
        );
        assert_eq!(
            CalcError::InvalidNumber("abc".into()).to_string(),
            "Error: Invalid number!"
        );
        assert_eq!(
            CalcError::MissingInput(Field::SecondOperand).to_string(),
            "Error: Unexpected end of input!"
        );
    }

    #[test]
    fn field_names() {
        assert_eq!(Field::FirstOperand.to_string(), "first number");
        assert_eq!(Field::Operator.to_string(), "operation");
    }
}
