pub mod app_state;
pub mod broadcast_envelope;
pub mod client_event;
pub mod connection_config;
pub mod connection_id;
pub mod connection_info;
pub mod connection_limits;
pub mod connection_registry;
pub mod disconnect_notice;
pub mod dispatcher;
pub mod error;
pub mod location_relay;
pub mod location_update;
pub mod metrics;
pub mod relay_event;
pub mod server_event;
pub mod shutdown_coordinator;
pub mod shutdown_guard;
pub mod transport;
pub mod web_socket_connection;

pub use app_state::{AppState, handler};
pub use broadcast_envelope::BroadcastEnvelope;
pub use client_event::{ClientEvent, SEND_LOCATION};
pub use connection_config::ConnectionConfig;
pub use connection_id::ConnectionId;
pub use connection_info::ConnectionInfo;
pub use connection_limits::ConnectionLimits;
pub use connection_registry::ConnectionRegistry;
pub use disconnect_notice::DisconnectNotice;
pub use dispatcher::{DispatchHandle, Dispatcher};
pub use error::{Result, WsError};
pub use location_relay::LocationRelay;
pub use location_update::LocationUpdate;
pub use metrics::Metrics;
pub use relay_event::RelayEvent;
pub use server_event::{RECEIVE_LOCATION, ServerEvent, USER_DISCONNECT};
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;
pub use transport::Transport;
pub use web_socket_connection::WebSocketConnection;

#[cfg(test)]
mod tests;
