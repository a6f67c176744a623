//! Axum HTTP gateway
//!
//! Routes, CORS policy, and server startup. All domain logic lives in
//! [`crate::catalog`] and [`crate::orders`]; this layer only maps HTTP
//! to those calls.

pub mod handlers;
pub mod state;
pub mod types;

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::GatewayConfig;
use state::AppState;

/// Build the application router.
///
/// Split out from [`run_server`] so integration tests can drive the
/// router directly without binding a socket.
pub fn router(state: AppState) -> Router {
    // Wide-open CORS with credentials.
    // Wildcards cannot be combined with credentials, so every allow-list
    // mirrors the request instead. Demo/dev policy only; a production
    // deployment needs a real origin allow-list.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/api/health", get(handlers::health_check))
        .route("/api/merchants", get(handlers::list_merchants))
        .route(
            "/api/merchants/{merchant_id}/menu",
            get(handlers::get_menu),
        )
        .route(
            "/api/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP gateway server
pub async fn run_server(config: &GatewayConfig, state: AppState) -> anyhow::Result<()> {
    let app = router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    println!("🚀 Gateway listening on http://{}", addr);
    tracing::info!(%addr, "gateway started");

    axum::serve(listener, app).await?;
    Ok(())
}
