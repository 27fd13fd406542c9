use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::ServerConfig;
use mergington_activities::web::{build_router, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 2. Config + directory
    let config = ServerConfig::from_env();
    let directory = match config.build_directory() {
        Ok(d) => d,
        Err(e) => {
            error!("could not load activities: {}", e);
            std::process::exit(1);
        }
    };
    info!(activities = directory.list().len(), "activity directory ready");

    // 3. Router
    let app = build_router(AppState::new(directory), &config.static_dir);

    // 4. Bind, with one fallback port
    let addr = match config.socket_addr(config.port) {
        Ok(a) => a,
        Err(e) => {
            error!(host = %config.host, port = config.port, "invalid listen address: {}", e);
            std::process::exit(1);
        }
    };
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config.port.saturating_add(1);
            warn!("could not bind {}: {}. Trying port {}", addr, e, fallback_port);
            let fallback = match config.socket_addr(fallback_port) {
                Ok(a) => a,
                Err(e) => {
                    error!("invalid fallback address: {}", e);
                    std::process::exit(1);
                }
            };
            match tokio::net::TcpListener::bind(fallback).await {
                Ok(l) => l,
                Err(e) => {
                    error!("could not bind fallback {}: {}", fallback, e);
                    std::process::exit(1);
                }
            }
        }
    };

    match listener.local_addr() {
        Ok(bound) => info!("serving activities on http://{}", bound),
        Err(e) => warn!("listening, but local address is unknown: {}", e),
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {}", e);
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("could not install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
