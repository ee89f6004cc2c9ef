//! Planning Poker server binary.

use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use planning_poker::adapters::{
    app_router, ConnectionRegistry, OriginPolicy, ServiceInfo, WebSocketState,
};
use planning_poker::application::SessionCoordinator;
use planning_poker::config::{AppConfig, ConfigError, ValidationError};

#[derive(Debug, Error)]
enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ValidationError> for StartupError {
    fn from(err: ValidationError) -> Self {
        StartupError::Config(err.into())
    }
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    let origin_policy = OriginPolicy::from_config(&config.server);

    let connections = Arc::new(ConnectionRegistry::new(config.realtime.send_queue_capacity));
    let (session, coordinator) = SessionCoordinator::new(connections.clone())
        .spawn(config.realtime.command_queue_capacity);

    let app = app_router(
        ServiceInfo {
            environment: config.server.environment,
        },
        WebSocketState::new(connections, session, origin_policy),
    );

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        environment = %config.server.environment,
        "Planning Poker API listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Open sockets hold session handles; stop waiting for them on shutdown.
    coordinator.abort();
    tracing::info!("Server stopped");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
