use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    response::IntoResponse,
    routing::{get, post},
};

use vigil_metrics::LatencyAggregator;

use crate::app::dto;

pub fn router() -> Router {
    Router::new()
        .route("/alert", post(ingest_alert))
        .route("/metrics", get(metrics))
}

pub async fn ingest_alert(
    Extension(aggregator): Extension<Arc<LatencyAggregator>>,
    Json(alert): Json<dto::AlertIngestRequest>,
) -> axum::response::Response {
    let receipt = aggregator.ingest(alert.origin_timestamp);

    tracing::info!(
        reason = %alert.reason,
        customer_id = %alert.customer_id,
        subject = alert.subject.as_deref(),
        latency_ms = receipt.latency_ms,
        "security alert received"
    );

    Json(serde_json::json!({
        "received": true,
        "latency_ms": receipt.latency_ms,
        "count": receipt.count,
    }))
    .into_response()
}

pub async fn metrics(
    Extension(aggregator): Extension<Arc<LatencyAggregator>>,
) -> axum::response::Response {
    Json(aggregator.snapshot()).into_response()
}
