use crate::{
    ClientEvent, ConnectionConfig, ConnectionId, ConnectionRegistry, DispatchHandle, Metrics,
    Result as WsErrorResult, ShutdownGuard, WsError,
};

use std::panic::Location;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::{Instant, interval_at};

/// How long teardown waits for the writer to flush queued frames
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Manages a single WebSocket connection
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    config: ConnectionConfig,
    metrics: Metrics,
    registry: ConnectionRegistry,
    dispatcher: DispatchHandle,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        config: ConnectionConfig,
        metrics: Metrics,
        registry: ConnectionRegistry,
        dispatcher: DispatchHandle,
    ) -> Self {
        Self {
            connection_id,
            config,
            metrics,
            registry,
            dispatcher,
        }
    }

    /// Handle the WebSocket connection lifecycle.
    ///
    /// `tx`/`rx` are the two ends of the outbound queue whose sender was
    /// registered for this connection before the upgrade.
    pub async fn handle(
        self,
        socket: WebSocket,
        tx: mpsc::Sender<Message>,
        mut rx: mpsc::Receiver<Message>,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Writer: drain outbound queue into the socket
        let mut send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
            let _ = ws_sender.close().await;
        });

        let result = match self.dispatcher.connected(self.connection_id).await {
            Ok(()) => {
                self.run(&mut ws_receiver, &tx, &mut shutdown_guard)
                    .await
            }
            Err(e) => Err(e),
        };

        // Leave the live set first so the notice only reaches the others
        self.registry.unregister(self.connection_id).await;
        if let Err(e) = self.dispatcher.disconnected(self.connection_id).await {
            log::error!(
                "Could not announce disconnect of {}: {}",
                self.connection_id,
                e
            );
        }

        drop(tx);
        if tokio::time::timeout(WRITER_DRAIN_TIMEOUT, &mut send_task)
            .await
            .is_err()
        {
            log::warn!(
                "Writer for connection {} did not drain in time, aborting",
                self.connection_id
            );
            send_task.abort();
        }

        match &result {
            Ok(()) => self.metrics.connection_closed("normal"),
            Err(e) => {
                self.metrics.error_occurred(e.code());
                self.metrics.connection_closed(e.code());
            }
        }

        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    async fn run(
        &self,
        ws_receiver: &mut futures::stream::SplitStream<WebSocket>,
        tx: &mpsc::Sender<Message>,
        shutdown_guard: &mut ShutdownGuard,
    ) -> WsErrorResult<()> {
        let period = self.config.heartbeat_interval();
        let timeout = self.config.heartbeat_timeout();
        let mut heartbeat = interval_at(Instant::now() + period, period);
        let mut last_seen = Instant::now();

        loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(Message::Close(_))) => {
                            log::info!("Received close frame from connection {}", self.connection_id);
                            return Ok(());
                        }
                        Some(Ok(msg)) => {
                            last_seen = Instant::now();
                            self.handle_client_message(msg).await?;
                        }
                        Some(Err(e)) => {
                            log::warn!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            return Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            return Ok(());
                        }
                    }
                }

                _ = heartbeat.tick() => {
                    if last_seen.elapsed() > timeout {
                        log::warn!(
                            "Connection {} silent for {}s, closing",
                            self.connection_id,
                            last_seen.elapsed().as_secs()
                        );
                        return Err(WsError::HeartbeatTimeout {
                            timeout_secs: self.config.heartbeat_timeout_secs,
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    if tx.try_send(Message::Ping(bytes::Bytes::new())).is_err() {
                        log::debug!("Skipped heartbeat ping for {}: send buffer full", self.connection_id);
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    let _ = tx.try_send(Message::Close(None));
                    return Ok(());
                }
            }
        }
    }

    /// Handle a message from the client. Only a stopped dispatcher is an error;
    /// bad frames are logged and skipped.
    async fn handle_client_message(&self, msg: Message) -> WsErrorResult<()> {
        match msg {
            Message::Text(text) => match ClientEvent::decode(text.as_str()) {
                Ok(ClientEvent::SendLocation(update)) => {
                    self.dispatcher.location(self.connection_id, update).await
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring frame from connection {}: {}",
                        self.connection_id,
                        e
                    );
                    self.metrics.malformed_frame();
                    Ok(())
                }
            },
            Message::Binary(data) => {
                log::debug!(
                    "Ignoring binary frame ({} bytes) from connection {}",
                    data.len(),
                    self.connection_id
                );
                self.metrics.malformed_frame();
                Ok(())
            }
            // Pings are answered by the protocol layer itself
            Message::Ping(_) | Message::Pong(_) => Ok(()),
            Message::Close(_) => Ok(()),
        }
    }
}
