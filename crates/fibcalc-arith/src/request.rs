//! Equation requests and their evaluation.

use crate::error::CalcError;
use crate::operator::Operator;

/// A fully read equation: label, two operands and an operator.
///
/// The label is carried along but never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationRequest {
    pub label: String,
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
}

impl EquationRequest {
    #[must_use]
    pub fn new(label: impl Into<String>, lhs: f64, op: Operator, rhs: f64) -> Self {
        Self {
            label: label.into(),
            lhs,
            op,
            rhs,
        }
    }

    /// Apply the operator to both operands.
    ///
    /// Division checks for an exactly zero divisor (`0.0` or `-0.0`); no
    /// epsilon is applied, so tiny non-zero divisors still divide.
    pub fn evaluate(&self) -> Result<f64, CalcError> {
        match self.op {
            Operator::Add => Ok(self.lhs + self.rhs),
            Operator::Sub => Ok(self.lhs - self.rhs),
            Operator::Mul => Ok(self.lhs * self.rhs),
            Operator::Div if self.rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Div => Ok(self.lhs / self.rhs),
        }
    }
}
