//! Handlers for read-only amenity endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::amenity::AmenityResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all amenities, ordered by name.
///
/// # Endpoint
///
/// `GET /amenities`
pub async fn list_amenities_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AmenityResponse>>, AppError> {
    let amenities = state.amenity_service.list_amenities().await?;

    Ok(Json(
        amenities.into_iter().map(AmenityResponse::from).collect(),
    ))
}

/// Retrieves a single amenity by id.
///
/// # Endpoint
///
/// `GET /amenities/{id}`
///
/// # Errors
///
/// Returns 404 Not Found when no amenity has the given id.
pub async fn get_amenity_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<AmenityResponse>, AppError> {
    let amenity = state.amenity_service.get_amenity(id).await?;

    Ok(Json(amenity.into()))
}
