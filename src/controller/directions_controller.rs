use anyhow::anyhow;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Extension, Json, Router};
use tracing::info;
use crate::controller::AppState;
use crate::helpers::api_error::{non_blank, ApiError};
use crate::helpers::handler_404::method_not_allowed_handler;
use crate::helpers::map_links::directions_url;
use crate::models::directions::{DirectionsQuery, DirectionsResult};

const GET_DIRECTIONS_FAILED: &str = "An error occurred while getting directions";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/get_directions", post(get_directions).fallback(method_not_allowed_handler))
        .route_layer(Extension(app_state))
}

pub async fn get_directions(
    Extension(app_state): Extension<AppState>,
    payload: Result<Json<DirectionsQuery>, JsonRejection>,
) -> Result<Json<DirectionsResult>, ApiError> {
    let Json(body) = payload?;
    let (origin, destination) = match (non_blank(body.origin), non_blank(body.destination)) {
        (Some(origin), Some(destination)) => (origin, destination),
        _ => return Err(ApiError::Validation("Origin and destination are required".to_string())),
    };
    info!("Getting directions from: {}, to: {}", origin, destination);

    let routes = app_state.maps_provider
        .get_directions(&origin, &destination)
        .await
        .map_err(|e| ApiError::internal(GET_DIRECTIONS_FAILED, e))?;

    let route = routes
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::NotFound(format!(
            "No routes found from {} to {}",
            origin,
            destination
        )))?;

    let leg = route.legs
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::internal(
            GET_DIRECTIONS_FAILED,
            anyhow!("Route '{}' came back without any legs", route.summary),
        ))?;

    Ok(Json(DirectionsResult {
        summary: route.summary,
        distance: leg.distance.text,
        duration: leg.duration.text,
        start_address: leg.start_address,
        end_address: leg.end_address,
        directions_url: directions_url(&origin, &destination),
    }))
}
