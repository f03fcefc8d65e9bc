use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const POINTS_FIELD: &str = "points";

/// One location report as it arrived on the channel.
///
/// Either `{latitude, longitude}` or `{points: [{name, latitude, longitude}, ...]}`,
/// but nothing here enforces that: fields are kept exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationUpdate(Map<String, Value>);

impl LocationUpdate {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The `points` sequence, only when present and array-typed
    pub fn points(&self) -> Option<&Vec<Value>> {
        self.0.get(POINTS_FIELD).and_then(Value::as_array)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for LocationUpdate {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
