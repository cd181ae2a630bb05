//! Domain Value Objects
//!
//! Immutable value types used by the application layer.

mod operator;

pub use operator::{InvalidOperatorError, Operator};
