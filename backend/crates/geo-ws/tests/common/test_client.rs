use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;
use serde_json::{Value, json};
use tokio::time::{Duration, timeout};

/// How long a "nothing arrives" assertion waits
pub const QUIET_PERIOD: Duration = Duration::from_millis(200);

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    /// Connect to the relay endpoint
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server.get_websocket("/ws").await.into_websocket().await;

        Self { ws }
    }

    /// Send a `send-location` frame with the given payload
    pub async fn send_location(&mut self, data: Value) {
        self.send_text(json!({"event": "send-location", "data": data}))
            .await;
    }

    /// Send a raw text frame
    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    /// Send a binary frame
    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        self.ws.send_message(WsMessage::Binary(data.into())).await;
    }

    /// Receive the next server event as JSON
    pub async fn receive_event(&mut self) -> Value {
        let text = self.ws.receive_text().await;
        serde_json::from_str(&text).expect("Server frame should be JSON")
    }

    /// Receive the next server event, panicking if none arrives within a second
    pub async fn expect_event(&mut self) -> Value {
        timeout(Duration::from_secs(1), self.receive_event())
            .await
            .expect("Timed out waiting for a server event")
    }

    /// Learn this client's id by sending a position and reading the echo
    pub async fn discover_id(&mut self) -> String {
        self.send_location(json!({"latitude": 0.0, "longitude": 0.0}))
            .await;
        let echo = self.expect_event().await;
        echo["data"]["id"]
            .as_str()
            .expect("Echo should carry an id")
            .to_string()
    }

    /// True when nothing arrives within QUIET_PERIOD
    pub async fn is_quiet(&mut self) -> bool {
        timeout(QUIET_PERIOD, self.ws.receive_text()).await.is_err()
    }

    /// Close the WebSocket connection
    pub async fn close(self) {
        self.ws.close().await;
    }
}

/// Connect several clients to the same server
pub async fn connect_clients(server: &TestServer, count: usize) -> Vec<WsTestClient> {
    let mut clients = Vec::with_capacity(count);
    for _ in 0..count {
        clients.push(WsTestClient::connect(server).await);
    }
    clients
}
