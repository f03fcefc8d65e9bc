use crate::ConnectionId;

use axum::extract::ws::Message;
use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::mpsc;

/// A live channel as seen by the registry
#[derive(Debug, Clone)]
pub struct ConnectionInfo {
    pub connection_id: ConnectionId,
    pub connected_at: DateTime<Utc>,
    /// Bounded outbound queue drained by the connection's writer task
    pub sender: mpsc::Sender<Message>,
}

impl ConnectionInfo {
    /// Time since the connection was registered
    pub fn age(&self) -> TimeDelta {
        Utc::now() - self.connected_at
    }
}
