use async_trait::async_trait;
use crate::models::directions::Route;
use crate::models::place::{Coordinates, Place};

pub mod google_maps_repo;
#[cfg(test)]
pub mod fake_maps_provider;

/// The three mapping operations the tool routes rely on.
///
/// An empty list means the provider understood the request and found nothing,
/// any other problem is an `Err`.
#[async_trait]
pub trait MapsProvider: Send + Sync {
    async fn geocode(&self, address: &str) -> anyhow::Result<Vec<Coordinates>>;

    async fn search_places(
        &self,
        query: &str,
        location: &Coordinates,
    ) -> anyhow::Result<Vec<Place>>;

    async fn get_directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> anyhow::Result<Vec<Route>>;
}
