//! Greeting generation ports and application service.
//!
//! The service is a stateless request handler: per request it enforces a
//! fixed-window quota and a block flag held in an external key-value store,
//! filters the prompt against a keyword blocklist, assembles the system
//! instruction, calls the external text generator, normalizes the reply, and
//! appends audit/usage log entries. All cross-request state lives in the
//! store; nothing is cached in-process.

mod config;
mod policy;
mod ports;
mod prompt;
mod service;


pub use config::{Citation, GreetingPolicyConfig};
pub use policy::{
    CLOSING_PHRASE_ARABIC, CLOSING_PHRASE_ENGLISH, ContentPolicy, REFUSAL_SENTINEL,
    ensure_closing_phrase, is_refusal,
};
pub use ports::{ClientStateStore, GenerationRequest, GreetingGenerator};
pub use prompt::{MODEL_ACKNOWLEDGEMENT, build_system_instruction};
pub use service::{GreetingReply, GreetingService};
