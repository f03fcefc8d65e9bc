use crate::{
    ConnectionConfig, ConnectionId, ConnectionRegistry, DispatchHandle, Metrics,
    ShutdownCoordinator, WebSocketConnection,
};

use geo_config::ExportConfig;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::Response,
};
use log::{debug, error, info, warn};
use tokio::sync::mpsc;

/// Shared application state for HTTP and WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: ConnectionRegistry,
    pub dispatcher: DispatchHandle,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    pub export_config: ExportConfig,
}

/// WebSocket upgrade handler
pub async fn handler(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> Result<Response, StatusCode> {
    if state.shutdown.is_shutdown() {
        debug!("Rejecting WebSocket upgrade during shutdown");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }

    let (tx, rx) = mpsc::channel::<Message>(state.config.send_buffer_size);

    // Register connection (enforces connection limits)
    let connection_id = state
        .registry
        .register(tx.clone())
        .await
        .map_err(|e| {
            warn!("Failed to register connection: {}", e);
            StatusCode::SERVICE_UNAVAILABLE
        })?;

    debug!("Upgrading connection {}", connection_id);

    let registry = state.registry.clone();

    Ok(ws
        .on_failed_upgrade(move |e| {
            warn!("WebSocket upgrade failed for {}: {}", connection_id, e);
            tokio::spawn(async move { registry.unregister(connection_id).await });
        })
        .on_upgrade(move |socket| handle_socket(socket, connection_id, state, tx, rx)))
}

/// Handle WebSocket connection after upgrade
async fn handle_socket(
    socket: WebSocket,
    connection_id: ConnectionId,
    state: AppState,
    tx: mpsc::Sender<Message>,
    rx: mpsc::Receiver<Message>,
) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        state.config,
        state.metrics,
        state.registry,
        state.dispatcher,
    );

    match connection.handle(socket, tx, rx, shutdown_guard).await {
        Ok(()) => info!("Connection {connection_id} finished"),
        Err(e) => error!("Connection {connection_id} error: {e}"),
    }
}
