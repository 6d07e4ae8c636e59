use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use tahniyat_domain::ClientId;

use crate::dto::{GenerateGreetingRequest, GreetingResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Handles one greeting generation request.
///
/// The client identity is derived from the forwarded address and user agent
/// headers; either missing header fails open to `unknown`.
pub async fn generate_greeting_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GenerateGreetingRequest>,
) -> ApiResult<Json<GreetingResponse>> {
    let client = ClientId::derive(
        headers
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok()),
        headers
            .get(header::USER_AGENT)
            .and_then(|value| value.to_str().ok()),
    );
    let options = payload.options.unwrap_or_default();

    let reply = state
        .greeting_service
        .generate_greeting(&client, &payload.prompt, &options)
        .await?;

    Ok(Json(GreetingResponse {
        greeting: reply.greeting,
        formatted_greeting: true,
        warning: reply.warning,
    }))
}
