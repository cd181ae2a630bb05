//! Request Handlers

pub mod calculate;
pub mod health;
pub mod index;
