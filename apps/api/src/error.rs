use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tahniyat_core::AppError;
use tracing::error;

/// API error payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // The wire carries the bare message, without the error-variant
        // prefix. Internal detail is logged server-side only; the caller
        // gets a fixed message.
        let message = match self.0 {
            AppError::Internal(detail) => {
                error!(detail = %detail, "request failed");
                "An internal server error occurred.".to_owned()
            }
            AppError::Validation(message)
            | AppError::Forbidden(message)
            | AppError::RateLimited(message)
            | AppError::Upstream(message) => message,
        };

        let payload = Json(ErrorResponse { error: message });

        (status, payload).into_response()
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use tahniyat_core::AppError;

    use super::ApiError;

    fn status_for(error: AppError) -> StatusCode {
        ApiError(error).into_response().status()
    }

    #[test]
    fn errors_map_to_contract_status_codes() {
        assert_eq!(
            status_for(AppError::Validation("Prompt is required".to_owned())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(AppError::Forbidden("blocked".to_owned())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(AppError::RateLimited("over quota".to_owned())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            status_for(AppError::Upstream("no candidates".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(AppError::Internal("boom".to_owned())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn wire_body_carries_the_bare_message() {
        let response = ApiError(AppError::RateLimited(
            "Rate limit exceeded. Please try again later.".to_owned(),
        ))
        .into_response();

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), 1024).await else {
            panic!("failed to read response body");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body was not JSON");
        };
        assert_eq!(json["error"], "Rate limit exceeded. Please try again later.");
    }

    #[tokio::test]
    async fn internal_detail_is_masked_on_the_wire() {
        let response = ApiError(AppError::Internal("connection pool exhausted".to_owned()))
            .into_response();

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), 1024).await else {
            panic!("failed to read response body");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body was not JSON");
        };
        assert_eq!(json["error"], "An internal server error occurred.");
    }
}
