use crate::{
    ConnectionId, ConnectionInfo, ConnectionLimits, Result as WsErrorResult, ServerEvent,
    Transport, WsError,
};

use std::collections::HashMap;
use std::panic::Location;
use std::sync::Arc;

use async_trait::async_trait;
use axum::extract::ws::Message;
use error_location::ErrorLocation;
use log::{debug, error, info, warn};
use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{RwLock, mpsc};

/// Registry for tracking active WebSocket connections
pub struct ConnectionRegistry {
    inner: Arc<RwLock<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    /// All active connections by connection_id
    connections: HashMap<ConnectionId, ConnectionInfo>,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(RwLock::new(RegistryInner {
                connections: HashMap::new(),
            })),
            limits,
        }
    }

    /// Register a new connection, returns ConnectionId if successful
    pub async fn register(&self, sender: mpsc::Sender<Message>) -> WsErrorResult<ConnectionId> {
        let mut inner = self.inner.write().await;

        if inner.connections.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.connections.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.connections.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut connection_id = ConnectionId::new();
        while inner.connections.contains_key(&connection_id) {
            connection_id = ConnectionId::new();
        }

        let info = ConnectionInfo {
            connection_id,
            connected_at: chrono::Utc::now(),
            sender,
        };

        inner.connections.insert(connection_id, info);
        info!(
            "Registered connection {connection_id} ({} total)",
            inner.connections.len()
        );

        Ok(connection_id)
    }

    /// Unregister a connection
    pub async fn unregister(&self, connection_id: ConnectionId) {
        let mut inner = self.inner.write().await;

        if let Some(info) = inner.connections.remove(&connection_id) {
            info!(
                "Unregistered connection {connection_id} after {}s ({} total remaining)",
                info.age().num_seconds(),
                inner.connections.len()
            );
        }
    }

    /// Get information about a specific connection
    pub async fn get(&self, connection_id: ConnectionId) -> Option<ConnectionInfo> {
        let inner = self.inner.read().await;
        inner.connections.get(&connection_id).cloned()
    }

    /// Get total connection count
    pub async fn total_count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.connections.len()
    }
}

#[async_trait]
impl Transport for ConnectionRegistry {
    async fn connections(&self) -> Vec<ConnectionId> {
        let inner = self.inner.read().await;
        inner.connections.keys().copied().collect()
    }

    async fn broadcast(&self, event: &ServerEvent) -> usize {
        // Serialize once, share the frame across every connection.
        let frame = match event.encode() {
            Ok(text) => Message::Text(text.into()),
            Err(e) => {
                error!("Failed to encode {} event: {}", event.name(), e);
                return 0;
            }
        };

        let inner = self.inner.read().await;
        let mut delivered = 0;

        for (connection_id, info) in &inner.connections {
            match info.sender.try_send(frame.clone()) {
                Ok(()) => delivered += 1,
                Err(TrySendError::Full(_)) => {
                    warn!(
                        "Send buffer full for connection {}, dropping {} event",
                        connection_id,
                        event.name()
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    debug!(
                        "Connection {} already closed, dropping {} event",
                        connection_id,
                        event.name()
                    );
                }
            }
        }

        delivered
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
