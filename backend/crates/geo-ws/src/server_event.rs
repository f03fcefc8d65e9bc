use crate::{BroadcastEnvelope, DisconnectNotice, Result as WsErrorResult};

use serde::{Deserialize, Serialize};

pub const RECEIVE_LOCATION: &str = "receive-location";
pub const USER_DISCONNECT: &str = "user-disconnect";

/// Frames the server fans out to every live connection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    ReceiveLocation(BroadcastEnvelope),
    UserDisconnect(DisconnectNotice),
}

impl ServerEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ReceiveLocation(_) => RECEIVE_LOCATION,
            Self::UserDisconnect(_) => USER_DISCONNECT,
        }
    }

    #[track_caller]
    pub fn encode(&self) -> WsErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
