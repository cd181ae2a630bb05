//! # Calc Server Library
//!
//! This crate provides a two-tier arithmetic calculator:
//! - A stateless `POST /calculate` JSON endpoint
//! - A static browser form served at `GET /`
//! - Health and Prometheus metrics endpoints
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: The `Operator` value object and its arithmetic
//! - **Application Layer**: The calculator service and wire DTOs
//! - **Infrastructure Layer**: Metrics collection
//! - **Presentation Layer**: HTTP routes, handlers, and middleware
//!
//! ## Module Structure
//!
//! ```text
//! calc_server/
//! +-- config/        Configuration management
//! +-- domain/        Domain value objects
//! +-- application/   Application services and DTOs
//! +-- infrastructure/ Metrics implementation
//! +-- presentation/  HTTP routes and middleware
//! +-- shared/        Common utilities (errors)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
