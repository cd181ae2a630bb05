//! Infrastructure Layer
//!
//! Implementations that touch the outside world.

pub mod metrics;
