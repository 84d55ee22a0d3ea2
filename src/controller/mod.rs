use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::repositories::MapsProvider;

pub mod directions_controller;
pub mod health_check;
pub mod places_controller;
pub mod time_controller;
#[cfg(test)]
pub mod test_helpers;

#[derive(Clone)]
pub struct AppState {
    pub maps_provider: Arc<dyn MapsProvider>,
    pub default_location: String,
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors_layer(&config.origin_urls)?)
        );

    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on: {}", address);
    axum::Server::bind(&address)
        .serve(application.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    Router::new()
        .merge(health_check::router())
        .merge(places_controller::router(app_state.clone()))
        .merge(directions_controller::router(app_state.clone()))
        .merge(time_controller::router(app_state))
        .fallback(page_not_found_handler)
}

fn cors_layer(origin_urls: &str) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    if origin_urls.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }

    let origins = origin_urls
        .split(',')
        .map(|origin| {
            origin
                .trim()
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    Ok(layer.allow_origin(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal due to: {}", e);
        return;
    }
    info!("Shutdown signal received, draining in-flight requests");
}
