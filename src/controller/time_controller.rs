use anyhow::Context;
use axum::routing::get;
use axum::{Extension, Json, Router};
use time::macros::{format_description, offset};
use time::{OffsetDateTime, UtcOffset};
use crate::controller::AppState;
use crate::helpers::api_error::ApiError;
use crate::helpers::handler_404::method_not_allowed_handler;
use crate::models::current_time::TimeResult;

pub const TIMEZONE: &str = "Asia/Jakarta";
// Jakarta has not observed daylight saving time since 1964
const TIMEZONE_OFFSET: UtcOffset = offset!(+7);
const GET_TIME_FAILED: &str = "An error occurred while getting the current time";

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/get_current_time", get(get_current_time).fallback(method_not_allowed_handler))
        .route_layer(Extension(app_state))
}

pub async fn get_current_time(
    Extension(app_state): Extension<AppState>,
) -> Result<Json<TimeResult>, ApiError> {
    let current_time = format_local_time(OffsetDateTime::now_utc())
        .map_err(|e| ApiError::internal(GET_TIME_FAILED, e))?;

    Ok(Json(TimeResult {
        current_time,
        timezone: TIMEZONE.to_string(),
        location: app_state.default_location,
    }))
}

/// e.g. `Monday, January 15, 2024 at 3:05:09 PM`
pub fn format_local_time(instant: OffsetDateTime) -> anyhow::Result<String> {
    instant
        .to_offset(TIMEZONE_OFFSET)
        .format(format_description!(
            "[weekday], [month repr:long] [day padding:none], [year] at [hour repr:12 padding:none]:[minute]:[second] [period]"
        ))
        .context("Unable to format the current time")
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use time::macros::datetime;
    use crate::controller::test_helpers::{get, state_with, DEFAULT_LOCATION};
    use crate::repositories::fake_maps_provider::FakeMapsProvider;
    use super::*;

    #[test]
    fn afternoon_is_formatted_in_jakarta_time() {
        let formatted = format_local_time(datetime!(2024-01-15 08:05:09 UTC)).unwrap();

        assert_eq!(formatted, "Monday, January 15, 2024 at 3:05:09 PM");
    }

    #[test]
    fn conversion_crosses_midnight_into_next_day() {
        let formatted = format_local_time(datetime!(2024-03-01 17:00:00 UTC)).unwrap();

        assert_eq!(formatted, "Saturday, March 2, 2024 at 12:00:00 AM");
    }

    #[test]
    fn input_offset_does_not_matter() {
        let from_new_york = format_local_time(datetime!(2024-01-15 03:05:09 -5)).unwrap();

        assert_eq!(from_new_york, "Monday, January 15, 2024 at 3:05:09 PM");
    }

    #[tokio::test]
    async fn route_reports_jakarta_and_default_location() {
        let (app_state, _) = state_with(FakeMapsProvider::default());

        let (status, body) = get(router(app_state), "/get_current_time").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["timezone"], "Asia/Jakarta");
        assert_eq!(body["location"], DEFAULT_LOCATION);
        assert!(body["current_time"].as_str().unwrap().contains(" at "));
    }
}
