//! Calculation Handler
//!
//! The single stateless endpoint of the service: deserialize the three
//! fields, evaluate, serialize the outcome back. Every calculation
//! outcome, including an unrecognized operator, responds with HTTP 200.

use axum::{extract::rejection::JsonRejection, Json};

use crate::application::dto::{CalculationRequest, CalculationResponse};
use crate::application::services::{
    CalculationOutcome, CalculatorService, DefaultCalculatorService,
};
use crate::infrastructure::metrics;
use crate::shared::error::AppError;

/// Evaluate a two-operand arithmetic expression
pub async fn calculate(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, AppError> {
    // A body that is not valid JSON is a transport failure, not a
    // calculation outcome
    let Json(body) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = DefaultCalculatorService::new();
    let outcome = service.evaluate(&body.num1, &body.num2, &body.operator);

    // Valid operators form a bounded label set; everything else collapses
    // to one label
    let (operator_label, outcome_label) = match outcome {
        CalculationOutcome::Value(_) => (body.operator.as_str(), "value"),
        CalculationOutcome::InvalidOperator => ("invalid", "invalid_operator"),
    };
    metrics::record_calculation(operator_label, outcome_label);

    Ok(Json(CalculationResponse::from(outcome)))
}
