//! Stop search and arrival prediction handlers
//!
//! Both endpoints take the raw JSON body and leave field checks to the
//! gateway service, so a missing field is a 400 rather than a 422.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use domain::{Prediction, StopPointsResponse};
use serde_json::Value;

use crate::{error::ApiError, state::AppState};

/// Find stops around the location in the request body
pub async fn stops(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<StopPointsResponse>, ApiError> {
    let Json(body) = body?;
    let response = state.gateway.stops(&body).await?;

    Ok(Json(response))
}

/// Fetch arrival predictions for the stop in the request body
pub async fn predictions(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<Prediction>>, ApiError> {
    let Json(body) = body?;
    let predictions = state.gateway.predictions(&body).await?;

    Ok(Json(predictions))
}
