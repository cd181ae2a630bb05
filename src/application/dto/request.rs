//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;

/// Calculation request
///
/// Operands travel as strings and are converted to floats by the server;
/// no well-formedness validation happens before evaluation.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    pub num1: String,
    pub num2: String,
    pub operator: String,
}
