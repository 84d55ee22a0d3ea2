use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use anyhow::anyhow;
use async_trait::async_trait;
use crate::models::directions::Route;
use crate::models::place::{Coordinates, Place};
use crate::repositories::MapsProvider;

/// Scripted stand-in for the Google Maps client that records how it was called.
#[derive(Default)]
pub struct FakeMapsProvider {
    pub coordinates: Vec<Coordinates>,
    pub places: Vec<Place>,
    pub routes: Vec<Route>,
    pub geocode_failure: Option<String>,
    pub search_failure: Option<String>,
    pub directions_failure: Option<String>,
    pub geocoded_addresses: Mutex<Vec<String>>,
    pub searched_queries: Mutex<Vec<String>>,
    pub search_calls: AtomicUsize,
    pub directions_calls: AtomicUsize,
}

impl FakeMapsProvider {
    /// Every operation fails with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            geocode_failure: Some(message.to_string()),
            search_failure: Some(message.to_string()),
            directions_failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn geocoded(&self) -> Vec<String> {
        self.geocoded_addresses.lock().unwrap().clone()
    }

    pub fn searched(&self) -> Vec<String> {
        self.searched_queries.lock().unwrap().clone()
    }
}

fn fail_if_scripted(failure: &Option<String>) -> anyhow::Result<()> {
    match failure {
        Some(message) => Err(anyhow!(message.clone())),
        None => Ok(()),
    }
}

#[async_trait]
impl MapsProvider for FakeMapsProvider {
    async fn geocode(&self, address: &str) -> anyhow::Result<Vec<Coordinates>> {
        self.geocoded_addresses.lock().unwrap().push(address.to_string());
        fail_if_scripted(&self.geocode_failure)?;
        Ok(self.coordinates.clone())
    }

    async fn search_places(
        &self,
        query: &str,
        _location: &Coordinates,
    ) -> anyhow::Result<Vec<Place>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.searched_queries.lock().unwrap().push(query.to_string());
        fail_if_scripted(&self.search_failure)?;
        Ok(self.places.clone())
    }

    async fn get_directions(
        &self,
        _origin: &str,
        _destination: &str,
    ) -> anyhow::Result<Vec<Route>> {
        self.directions_calls.fetch_add(1, Ordering::SeqCst);
        fail_if_scripted(&self.directions_failure)?;
        Ok(self.routes.clone())
    }
}
