use crate::{ConnectionId, LocationUpdate};

/// Work item on the single dispatch stream
#[derive(Debug, Clone, PartialEq)]
pub enum RelayEvent {
    Connected {
        connection_id: ConnectionId,
    },
    Location {
        connection_id: ConnectionId,
        update: LocationUpdate,
    },
    Disconnected {
        connection_id: ConnectionId,
    },
}

impl RelayEvent {
    pub fn connection_id(&self) -> ConnectionId {
        match self {
            Self::Connected { connection_id }
            | Self::Location { connection_id, .. }
            | Self::Disconnected { connection_id } => *connection_id,
        }
    }
}
