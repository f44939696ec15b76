/**
 * Error Conversion
 *
 * Converts `ApiError` values into HTTP responses. All handlers return
 * `Result<_, ApiError>`, so error rendering happens in exactly one place.
 *
 * # Response Format
 *
 * `Forbidden` answers a plain-text `Forbidden` body, matching the gate's
 * contract. Other client errors answer a small JSON body:
 *
 * ```json
 * { "error": "not found: wrong id", "status": 404 }
 * ```
 *
 * Internal faults answer a generic 500; the detail goes to the log only.
 */

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error: {:?}", self);
        }

        if let ApiError::Forbidden = self {
            return (StatusCode::FORBIDDEN, "Forbidden").into_response();
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_is_plain_text() {
        let response = ApiError::Forbidden.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| !v.to_str().unwrap_or_default().contains("json"))
            .unwrap_or(true));
    }

    #[test]
    fn test_not_found_is_json() {
        let response = ApiError::wrong_id().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }
}
