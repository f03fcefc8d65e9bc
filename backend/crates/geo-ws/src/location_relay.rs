use crate::{
    BroadcastEnvelope, ConnectionId, DisconnectNotice, LocationUpdate, Metrics, ServerEvent,
    Transport,
};

use log::{debug, info};

/// The fan-out core: tags location updates with their sender and echoes them
/// to every live connection, sender included.
///
/// Holds no state of its own beyond the injected transport; every call is a
/// function of the live set at that moment.
pub struct LocationRelay<T> {
    transport: T,
    metrics: Metrics,
}

impl<T: Transport> LocationRelay<T> {
    pub fn new(transport: T, metrics: Metrics) -> Self {
        Self { transport, metrics }
    }

    /// A channel has opened and the transport has already registered it
    pub async fn handle_connect(&self, connection_id: ConnectionId) -> ConnectionId {
        let live = self.transport.connections().await.len();
        info!("Connection {connection_id} joined the relay ({live} live)");
        connection_id
    }

    /// Relay one update from `sender` to every live connection.
    /// Returns the number of connections that accepted the envelope.
    pub async fn handle_message(&self, sender: ConnectionId, update: LocationUpdate) -> usize {
        let envelope = BroadcastEnvelope::from_update(sender, update);
        let shape = envelope.shape();
        self.metrics.location_received(shape);

        let event = ServerEvent::ReceiveLocation(envelope);
        self.fan_out(&event, sender, shape).await
    }

    /// Announce a teardown to whoever remains.
    /// The departed connection must already be gone from the transport.
    pub async fn handle_disconnect(&self, connection_id: ConnectionId) -> usize {
        let event = ServerEvent::UserDisconnect(DisconnectNotice::new(connection_id));
        let delivered = self.fan_out(&event, connection_id, "notice").await;

        info!("Connection {connection_id} left the relay, notified {delivered} remaining");
        delivered
    }

    async fn fan_out(&self, event: &ServerEvent, origin: ConnectionId, label: &str) -> usize {
        let targets = self.transport.connections().await.len();
        let delivered = self.transport.broadcast(event).await;

        self.metrics
            .broadcast_published(event.name(), targets, delivered);
        debug!(
            "{} ({label}) from {origin} delivered to {delivered}/{targets} connections",
            event.name()
        );

        delivered
    }
}
