//! # fibcalc-arith
//!
//! Calculator engine for FibCalc-rs. Reads an equation label, two operands
//! and an operator from a text stream, writing prompts and exactly one
//! result or error message to an output stream.
//!
//! ```
//! let mut out = Vec::new();
//! let outcome = fibcalc_arith::calculate("eq\n2\n+\n3\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(outcome, Ok(5.0));
//! assert!(String::from_utf8(out).unwrap().ends_with("Enter second number: 5"));
//! ```

pub mod engine;
pub mod error;
pub mod operator;
pub mod request;
pub mod tokens;

pub use engine::{calculate, Computation};
pub use error::{CalcError, Field};
pub use operator::Operator;
pub use request::EquationRequest;
pub use tokens::Tokens;
