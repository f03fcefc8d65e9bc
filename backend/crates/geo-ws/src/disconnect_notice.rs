use crate::ConnectionId;

use serde::{Deserialize, Serialize};

/// Announces that a connection has gone away, so its marker can be retired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisconnectNotice {
    pub id: ConnectionId,
}

impl DisconnectNotice {
    pub fn new(id: ConnectionId) -> Self {
        Self { id }
    }
}
