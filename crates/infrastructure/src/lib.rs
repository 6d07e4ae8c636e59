//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod gemini_greeting_generator;
mod redis_client_state_store;

pub use gemini_greeting_generator::{DEFAULT_GEMINI_BASE_URL, GeminiGreetingGenerator};
pub use redis_client_state_store::RedisClientStateStore;
