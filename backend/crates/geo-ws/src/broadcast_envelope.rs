use crate::location_update::POINTS_FIELD;
use crate::{ConnectionId, LocationUpdate};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ID_FIELD: &str = "id";

/// A location update tagged with the id of the connection that sent it.
///
/// The two shapes are mutually exclusive and chosen only by whether the
/// update carried an array-typed `points` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BroadcastEnvelope {
    /// `{id, points}`; points are relayed verbatim
    Points { id: ConnectionId, points: Vec<Value> },
    /// `{id, ...payload}`; every other field merged alongside `id`
    Position {
        id: ConnectionId,
        #[serde(flatten)]
        fields: Map<String, Value>,
    },
}

impl BroadcastEnvelope {
    pub fn from_update(sender: ConnectionId, update: LocationUpdate) -> Self {
        let mut fields = update.into_fields();

        match fields.remove(POINTS_FIELD) {
            Some(Value::Array(points)) => Self::Points { id: sender, points },
            other => {
                if let Some(value) = other {
                    fields.insert(POINTS_FIELD.to_string(), value);
                }
                // The sender's real id always wins over a payload-supplied one.
                fields.remove(ID_FIELD);
                Self::Position { id: sender, fields }
            }
        }
    }

    pub fn id(&self) -> ConnectionId {
        match self {
            Self::Points { id, .. } | Self::Position { id, .. } => *id,
        }
    }

    /// Shape label for logs and metrics
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Points { .. } => "points",
            Self::Position { .. } => "position",
        }
    }
}
