use crate::{
    ConnectionId, LocationRelay, LocationUpdate, RelayEvent, Result as WsErrorResult, Transport,
    WsError,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Cloneable submit side of the dispatch stream, held by every connection task
#[derive(Clone)]
pub struct DispatchHandle {
    events: mpsc::Sender<RelayEvent>,
}

impl DispatchHandle {
    /// Queue an event. Waits while the queue is full.
    pub async fn submit(&self, event: RelayEvent) -> WsErrorResult<()> {
        self.events.send(event).await.map_err(|e| {
            warn!(
                "Dropping event for connection {}: dispatcher stopped",
                e.0.connection_id()
            );
            WsError::DispatcherClosed {
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub async fn connected(&self, connection_id: ConnectionId) -> WsErrorResult<()> {
        self.submit(RelayEvent::Connected { connection_id }).await
    }

    pub async fn location(
        &self,
        connection_id: ConnectionId,
        update: LocationUpdate,
    ) -> WsErrorResult<()> {
        self.submit(RelayEvent::Location {
            connection_id,
            update,
        })
        .await
    }

    pub async fn disconnected(&self, connection_id: ConnectionId) -> WsErrorResult<()> {
        self.submit(RelayEvent::Disconnected { connection_id }).await
    }

    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}

/// Single consumer of relay events.
///
/// Each event, fan-out included, runs to completion before the next one is
/// taken, so events from one connection are relayed in the order they were
/// submitted.
pub struct Dispatcher<T> {
    relay: LocationRelay<T>,
    events: mpsc::Receiver<RelayEvent>,
}

impl<T: Transport + 'static> Dispatcher<T> {
    pub fn new(relay: LocationRelay<T>, capacity: usize) -> (Self, DispatchHandle) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { relay, events: rx }, DispatchHandle { events: tx })
    }

    /// Start the dispatcher on its own task
    pub fn spawn(relay: LocationRelay<T>, capacity: usize) -> (DispatchHandle, JoinHandle<()>) {
        let (dispatcher, handle) = Self::new(relay, capacity);
        let task = tokio::spawn(dispatcher.run());
        (handle, task)
    }

    /// Runs until every DispatchHandle has been dropped
    pub async fn run(mut self) {
        info!("Relay dispatcher started");

        while let Some(event) = self.events.recv().await {
            self.dispatch(event).await;
        }

        info!("Relay dispatcher stopped");
    }

    pub async fn dispatch(&self, event: RelayEvent) {
        match event {
            RelayEvent::Connected { connection_id } => {
                self.relay.handle_connect(connection_id).await;
            }
            RelayEvent::Location {
                connection_id,
                update,
            } => {
                self.relay.handle_message(connection_id, update).await;
            }
            RelayEvent::Disconnected { connection_id } => {
                self.relay.handle_disconnect(connection_id).await;
            }
        }
    }
}
