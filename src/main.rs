use axum::{extract::Request, ServiceExt};
use rainforest_catalog::{build_router, AppState, Catalog, Config};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,rainforest_catalog=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Rainforest Catalog — Rust + Axum    ║");
    info!("║  read-only products & categories     ║");
    info!("╚══════════════════════════════════════╝");

    // The catalog is the whole dataset; without it there is nothing to serve.
    let catalog = match Catalog::load(&config.data_dir, config.reference_check) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!(dir = %config.data_dir.display(), "Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(catalog, &config.api_prefix);
    let app = build_router(state);

    let addr = config.server_address();
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}{}/health", addr, config.api_prefix);
    info!("Products:     http://{}{}/products", addr, config.api_prefix);
    info!("Categories:   http://{}{}/categories", addr, config.api_prefix);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal"),
        _ = terminate => info!("Received SIGTERM signal"),
    }

    info!("Shutting down gracefully...");
}
