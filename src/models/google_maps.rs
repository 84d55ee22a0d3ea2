use anyhow::bail;
use serde::Deserialize;
use crate::models::place::Coordinates;

pub const STATUS_OK: &str = "OK";
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

/// Envelope shared by the geocode, text search and directions web services.
/// Directions put their payload under `routes` instead of `results`.
#[derive(Deserialize, Debug)]
pub struct GoogleMapsResponse<T> {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default = "Vec::new", alias = "routes")]
    pub results: Vec<T>,
}

impl<T> GoogleMapsResponse<T> {
    pub fn into_results(self) -> anyhow::Result<Vec<T>> {
        match self.status.as_str() {
            STATUS_OK => Ok(self.results),
            STATUS_ZERO_RESULTS => Ok(Vec::new()),
            status => bail!(
                "Google Maps responded with status {}: {}",
                status,
                self.error_message.as_deref().unwrap_or("no error message")
            ),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Deserialize, Debug)]
pub struct Geometry {
    pub location: Coordinates,
}
