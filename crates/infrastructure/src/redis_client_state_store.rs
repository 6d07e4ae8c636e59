//! Redis-backed client state store.
//!
//! Keys are namespaced `rate-limit:*` and `blocked:*`; audit entries go to
//! the fixed list keys `security-logs` and `greeting-logs`. Counters and
//! block flags expire automatically via TTL.

use async_trait::async_trait;
use redis::Script;

use tahniyat_application::ClientStateStore;
use tahniyat_core::{AppError, AppResult};
use tahniyat_domain::{ClientId, SecurityLogEntry, UsageLogEntry};

const RECORD_REQUEST_SCRIPT: &str = r#"
local key = KEYS[1]
local window = tonumber(ARGV[1])

local count = redis.call('INCR', key)
local ttl = redis.call('TTL', key)

if ttl < 0 then
  redis.call('EXPIRE', key, window)
end

return count
"#;

const SECURITY_LOG_KEY: &str = "security-logs";
const USAGE_LOG_KEY: &str = "greeting-logs";

/// Redis implementation of the client state store port.
#[derive(Clone)]
pub struct RedisClientStateStore {
    client: redis::Client,
}

impl RedisClientStateStore {
    /// Creates a store over a configured Redis client.
    #[must_use]
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn rate_limit_key(client: &ClientId) -> String {
        format!("rate-limit:{client}")
    }

    fn block_key(client: &ClientId) -> String {
        format!("blocked:{client}")
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::Internal(format!("failed to connect to redis: {error}")))
    }

    async fn push_log(&self, list_key: &str, payload: String) -> AppResult<()> {
        let mut connection = self.connection().await?;
        let _: i64 = redis::cmd("LPUSH")
            .arg(list_key)
            .arg(payload)
            .query_async(&mut connection)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to append redis log entry: {error}"))
            })?;

        Ok(())
    }
}

#[async_trait]
impl ClientStateStore for RedisClientStateStore {
    async fn request_count(&self, client: &ClientId) -> AppResult<Option<i64>> {
        let mut connection = self.connection().await?;
        let count: Option<i64> = redis::cmd("GET")
            .arg(Self::rate_limit_key(client))
            .query_async(&mut connection)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to read redis rate limit counter: {error}"))
            })?;

        Ok(count)
    }

    async fn record_request(&self, client: &ClientId, window_seconds: i64) -> AppResult<i64> {
        if window_seconds <= 0 {
            return Err(AppError::Validation(
                "window_seconds must be greater than zero".to_owned(),
            ));
        }

        let mut connection = self.connection().await?;
        let script = Script::new(RECORD_REQUEST_SCRIPT);
        let count: i64 = script
            .key(Self::rate_limit_key(client))
            .arg(window_seconds)
            .invoke_async(&mut connection)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to record redis request count: {error}"))
            })?;

        Ok(count)
    }

    async fn is_blocked(&self, client: &ClientId) -> AppResult<bool> {
        let mut connection = self.connection().await?;
        let exists: bool = redis::cmd("EXISTS")
            .arg(Self::block_key(client))
            .query_async(&mut connection)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to read redis block flag: {error}"))
            })?;

        Ok(exists)
    }

    async fn block_client(&self, client: &ClientId, ttl_seconds: i64) -> AppResult<()> {
        let mut connection = self.connection().await?;
        let _: () = redis::cmd("SET")
            .arg(Self::block_key(client))
            .arg(1)
            .arg("EX")
            .arg(ttl_seconds)
            .query_async(&mut connection)
            .await
            .map_err(|error| {
                AppError::Internal(format!("failed to set redis block flag: {error}"))
            })?;

        Ok(())
    }

    async fn append_security_log(&self, entry: &SecurityLogEntry) -> AppResult<()> {
        let payload = serde_json::to_string(entry).map_err(|error| {
            AppError::Internal(format!("failed to serialize security log entry: {error}"))
        })?;

        self.push_log(SECURITY_LOG_KEY, payload).await
    }

    async fn append_usage_log(&self, entry: &UsageLogEntry) -> AppResult<()> {
        let payload = serde_json::to_string(entry).map_err(|error| {
            AppError::Internal(format!("failed to serialize usage log entry: {error}"))
        })?;

        self.push_log(USAGE_LOG_KEY, payload).await
    }
}

#[cfg(test)]
mod tests {
    use tahniyat_domain::ClientId;

    use super::RedisClientStateStore;

    #[test]
    fn keys_are_namespaced_by_identity() {
        let client = ClientId::derive(Some("203.0.113.7"), Some("curl/8.5"));
        assert_eq!(
            RedisClientStateStore::rate_limit_key(&client),
            "rate-limit:203.0.113.7:curl/8.5"
        );
        assert_eq!(
            RedisClientStateStore::block_key(&client),
            "blocked:203.0.113.7:curl/8.5"
        );
    }
}
