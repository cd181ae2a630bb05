//! Domain Layer
//!
//! Core business types with no I/O dependencies.

pub mod value_objects;

pub use value_objects::{InvalidOperatorError, Operator};
