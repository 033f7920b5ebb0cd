//! Health check endpoint.

use axum::http::StatusCode;

/// GET /livez - Liveness probe.
///
/// Returns 200 immediately without touching storage.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
