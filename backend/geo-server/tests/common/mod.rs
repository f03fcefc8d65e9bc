#![allow(dead_code)]

//! Test infrastructure for geo-server HTTP tests

use geo_config::ExportConfig;
use geo_ws::{
    AppState, ConnectionConfig, ConnectionLimits, ConnectionRegistry, Dispatcher, LocationRelay,
    Metrics, ShutdownCoordinator,
};

use axum::{body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Create AppState for testing, with its dispatcher running on the test runtime
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_export(ExportConfig::default()).await
}

pub async fn create_test_app_state_with_export(export_config: ExportConfig) -> AppState {
    let registry = ConnectionRegistry::new(ConnectionLimits { max_total: 10000 });
    let metrics = Metrics::new();
    let relay = LocationRelay::new(registry.clone(), metrics.clone());
    let (dispatcher, _task) = Dispatcher::spawn(relay, 64);

    AppState {
        registry,
        dispatcher,
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
        export_config,
    }
}

/// Send one request through a fresh router
pub async fn send(app: axum::Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
