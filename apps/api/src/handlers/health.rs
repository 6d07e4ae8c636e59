use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use redis::AsyncCommands;

use crate::dto::{HealthDependencyStatus, HealthResponse};
use crate::state::AppState;

/// Reports service readiness; 503 when the redis dependency is unreachable.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let redis = check_redis(state.redis_client.clone()).await;

    let ready = redis.status == "ok";
    let status = if ready { "ok" } else { "degraded" };
    let http_status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            ready,
            redis,
        }),
    )
}

/// Pings redis over a fresh multiplexed connection.
async fn check_redis(redis_client: redis::Client) -> HealthDependencyStatus {
    let mut connection = match redis_client.get_multiplexed_async_connection().await {
        Ok(connection) => connection,
        Err(error) => {
            return HealthDependencyStatus {
                status: "error",
                detail: Some(format!("redis connection failed: {error}")),
            };
        }
    };

    let ping_response = connection.ping::<String>().await;
    match ping_response {
        Ok(value) if value.eq_ignore_ascii_case("pong") => HealthDependencyStatus {
            status: "ok",
            detail: None,
        },
        Ok(value) => HealthDependencyStatus {
            status: "error",
            detail: Some(format!("unexpected redis ping response: {value}")),
        },
        Err(error) => HealthDependencyStatus {
            status: "error",
            detail: Some(format!("redis ping failed: {error}")),
        },
    }
}
