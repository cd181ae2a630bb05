//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **CalculatorService**: Evaluates a two-operand arithmetic expression

pub mod calculator_service;

// Re-export calculator service types
pub use calculator_service::{CalculationOutcome, CalculatorService, DefaultCalculatorService};
