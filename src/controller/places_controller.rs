use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Extension, Json, Router};
use tracing::info;
use crate::controller::AppState;
use crate::helpers::api_error::{non_blank, ApiError};
use crate::helpers::handler_404::method_not_allowed_handler;
use crate::helpers::map_links::place_map_url;
use crate::models::place::{Place, PlaceQuery, PlaceResult, Rating, UNKNOWN_STATUS};

pub const MAX_PLACE_RESULTS: usize = 3;
const FIND_PLACES_FAILED: &str = "An error occurred while finding places";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/find_places", post(find_places).fallback(method_not_allowed_handler))
        .route_layer(Extension(app_state))
}

pub async fn find_places(
    Extension(app_state): Extension<AppState>,
    payload: Result<Json<PlaceQuery>, JsonRejection>,
) -> Result<Json<Vec<PlaceResult>>, ApiError> {
    let Json(body) = payload?;
    let query = non_blank(body.query)
        .ok_or_else(|| ApiError::Validation("Query is required".to_string()))?;
    let address = resolve_search_address(body.location.as_deref(), &app_state.default_location);
    info!("Finding places for query: '{}', near: {}", query, address);

    let coordinates = app_state.maps_provider
        .geocode(&address)
        .await
        .map_err(|e| ApiError::internal(FIND_PLACES_FAILED, e))?;

    let location = coordinates
        .first()
        .ok_or_else(|| ApiError::NotFound(format!("No location found for address: {}", address)))?;

    let places = app_state.maps_provider
        .search_places(&query, location)
        .await
        .map_err(|e| ApiError::internal(FIND_PLACES_FAILED, e))?;

    if places.is_empty() {
        return Err(ApiError::NotFound(format!(
            "No places found for query '{}' near {}",
            query,
            address
        )));
    }

    Ok(Json(
        places
            .into_iter()
            .take(MAX_PLACE_RESULTS)
            .map(to_place_result)
            .collect()
    ))
}

/// Falls back to the default location when none is given or the caller asked for "near me".
pub fn resolve_search_address(
    location: Option<&str>,
    default_location: &str,
) -> String {
    match location.map(str::trim) {
        Some(location) if !location.is_empty() && !location.to_lowercase().contains("near me") => {
            location.to_string()
        }
        _ => default_location.to_string(),
    }
}

fn to_place_result(place: Place) -> PlaceResult {
    PlaceResult {
        map_url: place_map_url(&place.name, &place.place_id),
        name: place.name,
        address: place.formatted_address,
        rating: Rating::from(place.rating),
        status: place.business_status.unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
    }
}
