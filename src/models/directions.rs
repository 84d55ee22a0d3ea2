use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, Default)]
pub struct DirectionsQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Route {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct RouteLeg {
    pub distance: TextValue,
    pub duration: TextValue,
    #[serde(default)]
    pub start_address: String,
    #[serde(default)]
    pub end_address: String,
}

/// Human readable text of a distance or duration, the numeric value is ignored.
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct TextValue {
    pub text: String,
}

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct DirectionsResult {
    pub summary: String,
    pub distance: String,
    pub duration: String,
    pub start_address: String,
    pub end_address: String,
    pub directions_url: String,
}
