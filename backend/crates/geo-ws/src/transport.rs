use crate::{ConnectionId, ServerEvent};

use async_trait::async_trait;

/// The live connection set, as seen by the relay.
///
/// The relay only enumerates and writes; adding and removing channels is
/// the transport's own business.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Snapshot of the currently live connections
    async fn connections(&self) -> Vec<ConnectionId>;

    /// Deliver one event to every live connection without waiting on any of
    /// them. Returns how many connections accepted it.
    async fn broadcast(&self, event: &ServerEvent) -> usize;
}
