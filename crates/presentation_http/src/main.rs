//! Transit gateway HTTP server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::GatewayService;
use axum::http::{HeaderValue, Method};
use infrastructure::{AppConfig, ServerConfig, TflProviderAdapter, init_logging};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal, sync::Notify};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so the log format can be honored
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(config.server.log_format)?;

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!("🚌 Transit gateway v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        host = %config.server.host,
        port = %config.server.port,
        default_provider = %config.gateway.default_provider,
        tfl_base_url = %config.tfl.base_url,
        "Configuration loaded"
    );

    // Initialize providers
    let tfl_adapter = TflProviderAdapter::new(&config.tfl)
        .map_err(|e| anyhow::anyhow!("Failed to initialize TfL provider: {e}"))?;

    let gateway = GatewayService::new(config.gateway.default_provider.clone())
        .with_provider(TflProviderAdapter::PROVIDER_NAME, Arc::new(tfl_adapter));

    if !gateway.is_ready() {
        warn!(
            default_provider = %gateway.default_provider(),
            providers = ?gateway.provider_names(),
            "Default provider is not registered; requests without application.apiName will be rejected"
        );
    }

    // Build router
    let app = routes::create_router(AppState::new(gateway))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server));

    // Start server
    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs);
    let shutdown_started = Arc::new(Notify::new());

    let server = {
        let shutdown_started = Arc::clone(&shutdown_started);
        async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_signal().await;
                    shutdown_started.notify_one();
                })
                .await
        }
    };

    // Bound the time spent draining open connections
    let drain_deadline = async {
        shutdown_started.notified().await;
        info!("⏳ Waiting up to {:?} for connections to close...", shutdown_timeout);
        tokio::time::sleep(shutdown_timeout).await;
    };

    tokio::select! {
        result = server => result?,
        () = drain_deadline => {
            warn!("Shutdown timeout elapsed, dropping open connections");
        }
    }

    info!("👋 Server shutdown complete");

    Ok(())
}

/// CORS policy from the configured origins; empty means any origin
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    if server.allowed_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| {
            o.parse::<HeaderValue>()
                .inspect_err(|_| warn!(origin = %o, "Ignoring invalid CORS origin"))
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
