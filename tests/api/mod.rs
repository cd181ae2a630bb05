//! HTTP Endpoint Tests

mod calculate_tests;
mod health_tests;
