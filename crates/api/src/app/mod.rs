//! Axum application wiring, one router builder per service.
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per service)
//! - `dto.rs`: request DTOs and JSON mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use vigil_auth::{Hs256TokenAuthority, StaticCredentialStore, TokenService};
use vigil_gate::{AlertSink, AuthorizationGate};
use vigil_metrics::LatencyAggregator;

pub mod dto;
pub mod errors;
pub mod routes;

/// Identity service: issues and validates tokens.
pub fn build_identity_app(jwt_secret: &str) -> Router {
    let store = Arc::new(StaticCredentialStore::with_demo_users());
    let authority = Hs256TokenAuthority::new(jwt_secret.as_bytes());
    let tokens = Arc::new(TokenService::new(store, authority));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::identity::router())
        .layer(Extension(tokens))
}

/// Audit service: the authorization gate guarding per-customer order status.
///
/// The alert sink is injected so the caller chooses where denials go (the
/// HTTP dispatcher in production, a local capture in tests).
pub fn build_audit_app(jwt_secret: &str, alerts: Arc<dyn AlertSink>) -> Router {
    let validator = Arc::new(Hs256TokenAuthority::new(jwt_secret.as_bytes()));
    let gate = Arc::new(AuthorizationGate::new(validator, alerts));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::orders::router())
        .layer(Extension(gate))
}

/// Alert sink service: ingestion plus streaming percentiles.
pub fn build_sink_app() -> Router {
    let aggregator = Arc::new(LatencyAggregator::new());

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::alerts::router())
        .layer(Extension(aggregator))
}
