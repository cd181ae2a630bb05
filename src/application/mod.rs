//! Application Layer
//!
//! Services and data transfer objects.

pub mod dto;
pub mod services;
