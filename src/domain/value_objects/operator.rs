//! Arithmetic Operator Value Object
//!
//! The four binary operators the calculator supports, parsed from their
//! single-character wire representation.

use std::fmt;
use std::str::FromStr;

/// A recognized arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Error returned when parsing an unrecognized operator string.
///
/// Carries the offending input so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid operator: {0:?}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Arithmetic follows IEEE-754 throughout: NaN operands propagate, and
    /// division by zero yields infinity (or NaN for 0/0) rather than an
    /// error.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }

    /// The wire symbol for this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(InvalidOperatorError(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
