use geo_server::logger::{self, LogOutput};
use geo_server::build_router;
use geo_server::config::{load_config, prepare_log_file};
use geo_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Dispatcher, LocationRelay,
    Metrics, ShutdownCoordinator,
};

use std::error::Error;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

const DISPATCHER_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let config = load_config()?;
    let log_file_path = prepare_log_file(&config)?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        LogOutput::select(log_file_path, config.logging.colored),
    )?;

    info!("Starting geo-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Create connection registry with limits
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.server.max_connections,
    });

    let metrics = Metrics::new();
    let shutdown = ShutdownCoordinator::new();

    // Single dispatch stream for all relay events
    let relay = LocationRelay::new(registry.clone(), metrics.clone());
    let (dispatcher, dispatcher_task) =
        Dispatcher::spawn(relay, config.websocket.dispatch_queue_size);

    let app_state = AppState {
        registry,
        dispatcher,
        metrics,
        shutdown: shutdown.clone(),
        config: ConnectionConfig::from(&config.websocket),
        export_config: config.export.clone(),
    };

    if !std::path::Path::new(&config.server.static_dir).is_dir() {
        warn!(
            "Static directory {} not found, page requests will return 404",
            config.server.static_dir
        );
    }

    let app = build_router(app_state, &config.server.static_dir);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Shutdown signal received, draining connections");
        })
        .await?;

    // The dispatcher stops once the router and every connection task have
    // dropped their handles
    match tokio::time::timeout(DISPATCHER_DRAIN_TIMEOUT, dispatcher_task).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("Relay dispatcher ended abnormally: {}", e),
        Err(_) => warn!("Relay dispatcher still busy after shutdown, exiting anyway"),
    }

    info!("Graceful shutdown complete");
    Ok(())
}
