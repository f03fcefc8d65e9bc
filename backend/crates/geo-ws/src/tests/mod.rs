mod shutdown;

use crate::{ConnectionId, ServerEvent, Transport};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// In-memory stand-in for the live connection set. Records every delivery.
#[derive(Clone, Default)]
pub(crate) struct FakeTransport {
    inner: Arc<Mutex<FakeInner>>,
}

#[derive(Default)]
struct FakeInner {
    live: Vec<ConnectionId>,
    deliveries: Vec<(ConnectionId, ServerEvent)>,
}

impl FakeTransport {
    pub(crate) fn connect(&self) -> ConnectionId {
        let id = ConnectionId::new();
        self.inner.lock().unwrap().live.push(id);
        id
    }

    pub(crate) fn connect_many(&self, count: usize) -> Vec<ConnectionId> {
        (0..count).map(|_| self.connect()).collect()
    }

    pub(crate) fn disconnect(&self, id: ConnectionId) {
        self.inner.lock().unwrap().live.retain(|live| *live != id);
    }

    pub(crate) fn deliveries(&self) -> Vec<(ConnectionId, ServerEvent)> {
        self.inner.lock().unwrap().deliveries.clone()
    }

    pub(crate) fn received_by(&self, id: ConnectionId) -> Vec<ServerEvent> {
        self.inner
            .lock()
            .unwrap()
            .deliveries
            .iter()
            .filter(|(target, _)| *target == id)
            .map(|(_, event)| event.clone())
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn connections(&self) -> Vec<ConnectionId> {
        self.inner.lock().unwrap().live.clone()
    }

    async fn broadcast(&self, event: &ServerEvent) -> usize {
        let mut inner = self.inner.lock().unwrap();
        let targets = inner.live.clone();
        for target in &targets {
            inner.deliveries.push((*target, event.clone()));
        }
        targets.len()
    }
}

/// Build a `serde_json::Map` from a `json!` object literal
pub(crate) fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
