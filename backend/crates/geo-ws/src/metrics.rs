use metrics::{counter, gauge};

/// Metrics collector for the relay and its connections
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "geo_ws" }
    }

    /// Record new connection established
    pub fn connection_established(&self) {
        counter!(format!("{}.connections.established", self.prefix)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).increment(1.0);
    }

    /// Record connection closed
    pub fn connection_closed(&self, reason: &str) {
        counter!(format!("{}.connections.closed", self.prefix)).increment(1);
        counter!(format!("{}.connections.closed.{}", self.prefix, reason)).increment(1);
        gauge!(format!("{}.connections.active", self.prefix)).decrement(1.0);
    }

    /// Record location update received from a client
    pub fn location_received(&self, shape: &str) {
        counter!(format!("{}.locations.received", self.prefix)).increment(1);
        counter!(format!("{}.locations.received.{}", self.prefix, shape)).increment(1);
    }

    /// Record a fan-out: how many live targets there were and how many accepted it
    pub fn broadcast_published(&self, event: &str, targets: usize, delivered: usize) {
        counter!(format!("{}.broadcast.published.{}", self.prefix, event)).increment(1);
        counter!(format!("{}.broadcast.delivered", self.prefix)).increment(delivered as u64);
        counter!(format!("{}.broadcast.dropped", self.prefix))
            .increment(targets.saturating_sub(delivered) as u64);
    }

    /// Record an inbound frame that could not be decoded
    pub fn malformed_frame(&self) {
        counter!(format!("{}.frames.malformed", self.prefix)).increment(1);
    }

    /// Record error occurrence
    pub fn error_occurred(&self, error_type: &str) {
        counter!(format!("{}.errors.total", self.prefix)).increment(1);
        counter!(format!("{}.errors.{}", self.prefix, error_type)).increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
