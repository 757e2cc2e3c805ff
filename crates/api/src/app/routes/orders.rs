use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};

use vigil_gate::{AuthorizationGate, AuthorizationOutcome, DenialReason};

use crate::app::errors;

pub fn router() -> Router {
    Router::new().route("/orders/:customer_id/status", get(order_status))
}

pub async fn order_status(
    Extension(gate): Extension<Arc<AuthorizationGate>>,
    Path(customer_id): Path<String>,
    headers: HeaderMap,
) -> axum::response::Response {
    // A header that is not valid UTF-8 is treated as absent.
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match gate.authorize(bearer, &customer_id) {
        AuthorizationOutcome::Allowed => (
            StatusCode::OK,
            Json(serde_json::json!({
                "customer_id": customer_id,
                "status": "delivered",
            })),
        )
            .into_response(),
        AuthorizationOutcome::Denied {
            reason: DenialReason::NoToken,
            ..
        } => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_token",
            "missing or invalid token",
        ),
        AuthorizationOutcome::Denied {
            reason: DenialReason::BadToken,
            ..
        } => errors::json_error(StatusCode::UNAUTHORIZED, "invalid_token", "invalid token"),
        AuthorizationOutcome::Denied {
            reason: DenialReason::UnauthorizedAccess,
            ..
        } => errors::json_error(StatusCode::FORBIDDEN, "forbidden", "forbidden"),
    }
}
