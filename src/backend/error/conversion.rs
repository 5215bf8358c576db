/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`. Error responses are JSON:
 *
 * ```json
 * { "message": "Error message", "status": 400 }
 * ```
 *
 * Server-side failures are logged here at error level with their full
 * details before the generic message goes out.
 *
 * Body extractor rejections become 400s with the same JSON
 * shape instead of axum's plain-text defaults.
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;
use crate::shared::ErrorResponse;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        let body = ErrorResponse {
            message: self.message(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::bad_request(rejection.body_text())
    }
}
