use crate::{LocationUpdate, Result as WsErrorResult, WsError};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

pub const SEND_LOCATION: &str = "send-location";

/// Frames a client may send: `{"event": "<name>", "data": <payload>}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    SendLocation(LocationUpdate),
}

impl ClientEvent {
    /// Decode a text frame. Unknown events and non-object payloads are rejected.
    #[track_caller]
    pub fn decode(text: &str) -> WsErrorResult<Self> {
        serde_json::from_str(text).map_err(|e| WsError::InvalidMessage {
            message: format!("undecodable client frame: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SendLocation(_) => SEND_LOCATION,
        }
    }
}
