//! Subscription Billing server binary.

use std::error::Error;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use subscription_billing::adapters::http::{api_router, middleware, AppState};
use subscription_billing::adapters::postgres;
use subscription_billing::config::{AppConfig, LogFormat, ServerConfig, StorageBackend};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);

    let state = match config.storage.backend {
        StorageBackend::Postgres => {
            let pool = postgres::connect(&config.database).await?;
            if config.database.run_migrations {
                postgres::run_migrations(&pool).await?;
            }
            AppState::postgres(pool)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; data will not survive a restart");
            AppState::in_memory()
        }
    };

    let app = middleware::apply(api_router(state), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Plain => builder.init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
