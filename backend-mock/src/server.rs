/// Axum HTTP server setup and routing

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::ledger::MockLedger;

pub fn create_router(ledger: Arc<MockLedger>) -> Router {
    // Allow requests from the wallet client and browser frontends
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Auth endpoints
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/auth/import", post(handlers::import_wallet))
        .route("/auth/verify/:address", get(handlers::verify))
        // Wallet endpoints
        .route("/wallet/balance/:address", get(handlers::get_balance))
        .route("/wallet/info/:address", get(handlers::get_wallet_info))
        // Transaction endpoints
        .route("/transactions/send", post(handlers::send_transaction))
        .route("/transactions/history/:address", get(handlers::get_history))
        .route("/transactions/:tx_hash", get(handlers::get_transaction))
        // Notification endpoints. GET takes a wallet address, DELETE an id;
        // they share the path segment the way the real API routes do.
        .route("/notifications/", post(handlers::create_notification))
        .route(
            "/notifications/:target",
            get(handlers::get_notifications).delete(handlers::delete_notification),
        )
        .route(
            "/notifications/:target/read",
            axum::routing::put(handlers::mark_notification_read),
        )
        // Shared state
        .with_state(ledger)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(ledger: Arc<MockLedger>, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(ledger);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Mock wallet backend listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind an ephemeral loopback port and serve in the background, returning the
/// bound address. Used by the client's integration tests.
pub async fn serve_ephemeral(ledger: Arc<MockLedger>) -> anyhow::Result<SocketAddr> {
    let app = create_router(ledger);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            log::error!("mock backend exited: {}", e);
        }
    });

    Ok(addr)
}
