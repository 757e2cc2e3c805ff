use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use vigil_auth::{LoginError, TokenService, TokenValidator};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/validate", post(validate))
}

pub async fn login(
    Extension(tokens): Extension<Arc<TokenService>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    match tokens.issue(&body.username, &body.password, Utc::now()) {
        Ok(token) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "access_token": token,
                "token_type": "bearer",
            })),
        )
            .into_response(),
        Err(LoginError::InvalidCredentials) => errors::json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid credentials",
        ),
        Err(LoginError::Signing(err)) => {
            tracing::error!(error = %err, "token signing failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "token_error",
                "failed to issue token",
            )
        }
    }
}

/// Token introspection: always 200, the verdict is in the body.
pub async fn validate(
    Extension(tokens): Extension<Arc<TokenService>>,
    Json(body): Json<dto::ValidateRequest>,
) -> axum::response::Response {
    match tokens.validate(&body.token, Utc::now()) {
        Ok(claims) => Json(serde_json::json!({ "valid": true, "claims": claims })).into_response(),
        Err(_) => Json(serde_json::json!({ "valid": false })).into_response(),
    }
}
