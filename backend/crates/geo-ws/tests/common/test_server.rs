#![allow(dead_code)]

use geo_config::ExportConfig;
use geo_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Dispatcher, LocationRelay,
    Metrics, ShutdownCoordinator,
};

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Configuration for test server instances
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub max_connections_total: usize,
    pub send_buffer_size: usize,
    pub dispatch_queue_size: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            max_connections_total: 100,
            send_buffer_size: 100,
            dispatch_queue_size: 1024,
        }
    }
}

impl TestServerConfig {
    /// Create config with strict connection limits (for limit tests)
    pub fn with_strict_limits() -> Self {
        Self {
            max_connections_total: 2,
            ..Default::default()
        }
    }
}

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

/// Create a TestServer with default configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_config(TestServerConfig::default())
}

/// Create a TestServer with custom configuration
pub fn create_test_server_with_config(config: TestServerConfig) -> TestServerWithState {
    let (app, app_state) = create_app(config);
    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}

/// Build the Axum Router with AppState; the dispatcher runs on the test runtime
fn create_app(config: TestServerConfig) -> (Router, AppState) {
    let registry = ConnectionRegistry::new(ConnectionLimits {
        max_total: config.max_connections_total,
    });
    let metrics = Metrics::default();

    let relay = LocationRelay::new(registry.clone(), metrics.clone());
    let (dispatcher, _task) = Dispatcher::spawn(relay, config.dispatch_queue_size);

    let app_state = AppState {
        registry,
        dispatcher,
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig {
            send_buffer_size: config.send_buffer_size,
            ..Default::default()
        },
        export_config: ExportConfig::default(),
    };

    let router = Router::new()
        .route("/ws", get(geo_ws::handler))
        .with_state(app_state.clone());

    (router, app_state)
}
