#[tokio::main]
async fn main() {
    vigil_observability::init();

    let app = vigil_api::app::build_sink_app();

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8002")
        .await
        .expect("failed to bind 0.0.0.0:8002");

    tracing::info!("alert sink listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
