use serde::Serialize;

#[derive(Clone, Serialize, Debug, PartialEq)]
pub struct TimeResult {
    pub current_time: String,
    pub timezone: String,
    pub location: String,
}
