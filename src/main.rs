//! `order-taking-server` entry point

use order_taking::api::create_router;
use order_taking::infrastructure::{AppConfig, AppDependencies};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_taking=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting order-taking service...");

    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                host = %config.app_host,
                port = config.app_port,
                standard_unit_price = %config.standard_unit_price,
                "configuration loaded"
            );
            config
        }
        Err(error) => {
            tracing::warn!(%error, "failed to load configuration from environment, using defaults");
            AppConfig::default()
        }
    };

    let bind_address = config.bind_address();
    let app = create_router(AppDependencies::new(config)).layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("order-taking service listening on http://{bind_address}");
    tracing::info!("  POST /orders  - Place an order");
    tracing::info!("  GET  /health  - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("order-taking service stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(error) => tracing::error!(%error, "failed to listen for shutdown signal"),
    }
}
