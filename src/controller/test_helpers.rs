use std::sync::Arc;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use crate::controller::AppState;
use crate::repositories::fake_maps_provider::FakeMapsProvider;

pub const DEFAULT_LOCATION: &str = "Jakarta, Indonesia";

pub fn state_with(provider: FakeMapsProvider) -> (AppState, Arc<FakeMapsProvider>) {
    let provider = Arc::new(provider);
    let app_state = AppState {
        maps_provider: provider.clone(),
        default_location: DEFAULT_LOCATION.to_string(),
    };
    (app_state, provider)
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}
