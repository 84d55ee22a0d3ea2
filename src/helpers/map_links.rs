const SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1";
const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/?api=1";

pub fn place_map_url(name: &str, place_id: &str) -> String {
    format!(
        "{}&query={}&query_place_id={}",
        SEARCH_URL,
        urlencoding::encode(name),
        urlencoding::encode(place_id),
    )
}

pub fn directions_url(origin: &str, destination: &str) -> String {
    format!(
        "{}&origin={}&destination={}",
        DIRECTIONS_URL,
        urlencoding::encode(origin),
        urlencoding::encode(destination),
    )
}
