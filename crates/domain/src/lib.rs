//! Domain types for the Tahniyat greeting service.

#![forbid(unsafe_code)]

/// Audit and usage log entry types.
pub mod audit;
/// Client identity derivation.
pub mod client;
/// Greeting options and prompt composition.
pub mod greeting;

pub use audit::{SecurityAction, SecurityLogEntry, UsageLogEntry};
pub use client::ClientId;
pub use greeting::{GreetingOptions, Language, Tone};
