use axum::http::StatusCode;

/// Static liveness probe, shared by all three services.
pub async fn health() -> StatusCode {
    StatusCode::OK
}
