//! Application services and ports.

#![forbid(unsafe_code)]

mod greeting_service;

pub use greeting_service::{
    CLOSING_PHRASE_ARABIC, CLOSING_PHRASE_ENGLISH, Citation, ClientStateStore, ContentPolicy,
    GenerationRequest, GreetingGenerator, GreetingPolicyConfig, GreetingReply, GreetingService,
    MODEL_ACKNOWLEDGEMENT, REFUSAL_SENTINEL, build_system_instruction, ensure_closing_phrase,
    is_refusal,
};
