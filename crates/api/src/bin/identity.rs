#[tokio::main]
async fn main() {
    vigil_observability::init();

    let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set; using insecure dev default");
        "devsecret".to_string()
    });

    let app = vigil_api::app::build_identity_app(&jwt_secret);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8000")
        .await
        .expect("failed to bind 0.0.0.0:8000");

    tracing::info!("identity service listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
