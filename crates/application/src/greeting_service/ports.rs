use async_trait::async_trait;

use tahniyat_core::AppResult;
use tahniyat_domain::{ClientId, SecurityLogEntry, UsageLogEntry};

/// Port for the external atomic key-value store that holds all cross-request
/// client state: quota counters, block flags, and the append-only log lists.
#[async_trait]
pub trait ClientStateStore: Send + Sync {
    /// Reads the request counter for the client's current quota window.
    ///
    /// Returns `None` when no window exists (the previous one expired or the
    /// client was never seen).
    async fn request_count(&self, client: &ClientId) -> AppResult<Option<i64>>;

    /// Atomically increments the client's request counter, creating it with
    /// the given window time-to-live when absent. Returns the updated count.
    async fn record_request(&self, client: &ClientId, window_seconds: i64) -> AppResult<i64>;

    /// Whether a block flag exists for the client.
    async fn is_blocked(&self, client: &ClientId) -> AppResult<bool>;

    /// Sets the block flag for the client with the given time-to-live.
    async fn block_client(&self, client: &ClientId, ttl_seconds: i64) -> AppResult<()>;

    /// Appends an entry to the security log list.
    async fn append_security_log(&self, entry: &SecurityLogEntry) -> AppResult<()>;

    /// Appends an entry to the usage log list.
    async fn append_usage_log(&self, entry: &UsageLogEntry) -> AppResult<()>;
}

/// One request to the external text-generation service.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Assembled system instruction, sent as the opening conversation turn.
    pub system_instruction: String,
    /// The live user prompt.
    pub prompt: String,
}

/// Port for the external text-generation service.
#[async_trait]
pub trait GreetingGenerator: Send + Sync {
    /// Generates greeting text for the request.
    ///
    /// A missing or empty completion is an upstream error, not an empty
    /// string.
    async fn generate(&self, request: GenerationRequest) -> AppResult<String>;
}
