//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::CalculationOutcome;

/// Error string reported for an unrecognized operator.
pub const INVALID_OPERATOR_MESSAGE: &str = "Invalid operator";

/// Calculation response
///
/// Exactly one of `result` and `error` is present; absent fields are
/// omitted from the JSON body. Non-finite results (NaN, infinity)
/// serialize as JSON `null` in the `result` field.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<CalculationOutcome> for CalculationResponse {
    fn from(outcome: CalculationOutcome) -> Self {
        match outcome {
            CalculationOutcome::Value(result) => Self {
                result: Some(result),
                error: None,
            },
            CalculationOutcome::InvalidOperator => Self {
                result: None,
                error: Some(INVALID_OPERATOR_MESSAGE.to_string()),
            },
        }
    }
}
