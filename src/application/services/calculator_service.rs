//! Calculator Service
//!
//! Evaluates a two-operand arithmetic expression from its raw wire fields.

use crate::domain::Operator;

/// Calculator service trait
pub trait CalculatorService: Send + Sync {
    /// Evaluate `num1 <operator> num2` where all three are raw strings as
    /// received on the wire.
    fn evaluate(&self, num1: &str, num2: &str, operator: &str) -> CalculationOutcome;
}

/// Outcome of evaluating a calculation request.
///
/// A tagged result rather than a mixed-type value: the value arm carries
/// any `f64` (including non-finite ones), the error arm marks an
/// unrecognized operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationOutcome {
    Value(f64),
    InvalidOperator,
}

/// Default calculator implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCalculatorService;

impl DefaultCalculatorService {
    pub fn new() -> Self {
        Self
    }
}

impl CalculatorService for DefaultCalculatorService {
    fn evaluate(&self, num1: &str, num2: &str, operator: &str) -> CalculationOutcome {
        let op: Operator = match operator.parse() {
            Ok(op) => op,
            Err(e) => {
                tracing::debug!(operator = %operator, "Rejected calculation: {}", e);
                return CalculationOutcome::InvalidOperator;
            }
        };

        let lhs = parse_operand(num1);
        let rhs = parse_operand(num2);
        let result = op.apply(lhs, rhs);

        tracing::debug!(%lhs, %rhs, operator = %op, %result, "Evaluated calculation");

        CalculationOutcome::Value(result)
    }
}

/// Convert a raw operand string to `f64`.
///
/// Operands travel as strings; anything that is not a well-formed float
/// (after trimming surrounding whitespace) becomes NaN and propagates
/// through the arithmetic.
fn parse_operand(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
