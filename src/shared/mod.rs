//! Shared Utilities
//!
//! Cross-cutting helpers used by every layer.

pub mod error;

pub use error::AppError;
