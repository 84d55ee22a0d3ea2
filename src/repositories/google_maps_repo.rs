use std::time::Duration;
use anyhow::Context;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::config::Config;
use crate::models::directions::Route;
use crate::models::google_maps::{GeocodeResult, GoogleMapsResponse};
use crate::models::place::{Coordinates, Place};
use crate::repositories::MapsProvider;

pub struct GoogleMapsRepo {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    search_radius_meters: u32,
}

impl GoogleMapsRepo {
    pub fn new(
        config: &Config,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Error building the Google Maps http client")?;

        Ok(Self {
            client,
            base_url: config.google_maps_base_url.trim_end_matches('/').to_string(),
            api_key: config.google_maps_api_key.clone(),
            search_radius_meters: config.search_radius_meters,
        })
    }

    async fn get_results<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> anyhow::Result<Vec<T>> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("Calling Google Maps endpoint: {}", endpoint);

        // reqwest errors carry the full url, strip it so the api key never reaches the logs
        let response = self.client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("Request to Google Maps {} failed", endpoint))?
            .error_for_status()
            .map_err(|e| e.without_url())
            .with_context(|| format!("Google Maps {} returned an error status", endpoint))?;

        let body: GoogleMapsResponse<T> = response
            .json()
            .await
            .map_err(|e| e.without_url())
            .with_context(|| format!("Unable to decode Google Maps {} response", endpoint))?;

        body.into_results()
    }
}

#[async_trait]
impl MapsProvider for GoogleMapsRepo {
    async fn geocode(
        &self,
        address: &str,
    ) -> anyhow::Result<Vec<Coordinates>> {
        let results: Vec<GeocodeResult> = self
            .get_results(
                "geocode/json",
                &[("address", address.to_string())],
            ).await?;

        Ok(results
            .into_iter()
            .map(|result| result.geometry.location)
            .collect())
    }

    async fn search_places(
        &self,
        query: &str,
        location: &Coordinates,
    ) -> anyhow::Result<Vec<Place>> {
        self.get_results(
            "place/textsearch/json",
            &[
                ("query", query.to_string()),
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", self.search_radius_meters.to_string()),
            ],
        ).await
    }

    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> anyhow::Result<Vec<Route>> {
        self.get_results(
            "directions/json",
            &[
                ("origin", origin.to_string()),
                ("destination", destination.to_string()),
            ],
        ).await
    }
}
