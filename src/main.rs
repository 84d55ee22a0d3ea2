use std::sync::Arc;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;
use crate::config::Config;
use crate::controller::AppState;
use crate::repositories::google_maps_repo::GoogleMapsRepo;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    let maps_repo = GoogleMapsRepo::new(&config)?;

    let app_state = AppState {
        maps_provider: Arc::new(maps_repo),
        default_location: config.default_location.clone(),
    };

    controller::serve(app_state, &config).await
}
