/**
 * Error Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers and extractors can
 * return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Invalid email or password",
 *   "code": "invalid_credentials",
 *   "status": 401
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::error::AuthError;
use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Infrastructure detail stays in the log.
        if let Self::Auth(AuthError::Unavailable(detail)) = &self {
            tracing::error!(%detail, "Request failed, service unavailable");
        } else if status.is_server_error() {
            tracing::error!("Request failed: {self}");
        } else if status == StatusCode::UNAUTHORIZED {
            tracing::debug!(code = self.code(), "Request unauthorized");
        }

        let body = serde_json::json!({
            "error": self.message(),
            "code": self.code(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_json_error_body() {
        let response = BackendError::from(AuthError::EmailTaken).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Email already registered");
        assert_eq!(body["code"], "email_taken");
        assert_eq!(body["status"], 409);
    }

    #[tokio::test]
    async fn test_unavailable_body_is_generic() {
        let response =
            BackendError::from(AuthError::Unavailable("pool timed out".into())).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Service temporarily unavailable");
        assert!(!body.to_string().contains("pool timed out"));
    }
}
