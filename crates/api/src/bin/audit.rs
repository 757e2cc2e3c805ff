use std::sync::Arc;

#[tokio::main]
async fn main() {
    vigil_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "devsecret".to_string()
    });
    let alert_url =
        std::env::var("ALERT_URL").unwrap_or_else(|_| "http://alert:8002/alert".to_string());

    let dispatcher = vigil_alerts::HttpAlertDispatcher::new(alert_url)
        .expect("failed to build alert delivery client");

    let app = vigil_api::app::build_audit_app(&jwt_secret, Arc::new(dispatcher));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8001")
        .await
        .expect("failed to bind 0.0.0.0:8001");

    tracing::info!("audit service listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
