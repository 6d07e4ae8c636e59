//! HTTP handlers.

pub mod greeting;
pub mod health;
