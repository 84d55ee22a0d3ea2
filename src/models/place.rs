use serde::{Deserialize, Serialize};

pub const NO_RATING: &str = "No rating";
pub const UNKNOWN_STATUS: &str = "UNKNOWN";

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct PlaceQuery {
    pub query: Option<String>,
    pub location: Option<String>,
}

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A text search hit as returned by the places provider.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Place {
    #[serde(default)]
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub rating: Option<f64>,
    pub business_status: Option<String>,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum Rating {
    Score(f64),
    Unrated(&'static str),
}

impl From<Option<f64>> for Rating {
    fn from(rating: Option<f64>) -> Self {
        match rating {
            Some(score) => Rating::Score(score),
            None => Rating::Unrated(NO_RATING),
        }
    }
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct PlaceResult {
    pub name: String,
    pub address: String,
    pub rating: Rating,
    pub status: String,
    pub map_url: String,
}
