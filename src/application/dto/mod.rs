//! Data Transfer Objects
//!
//! Wire-facing request and response structures.

pub mod request;
pub mod response;

pub use request::CalculationRequest;
pub use response::CalculationResponse;
