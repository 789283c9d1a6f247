//! Handlers for listing endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::listing::{
    CreateListingRequest, ListingListResponse, ListingQueryParams, ListingResponse,
    PatchListingRequest,
};
use crate::api::dto::pagination::PaginationMeta;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a filtered, ordered, paginated collection of listings.
///
/// # Endpoint
///
/// `GET /listings`
///
/// # Query Parameters
///
/// - Exact-match filters: `listing_type`, `is_available`, `location`,
///   `max_guests`, `bedrooms`
/// - `search` - case-insensitive substring match over title, description,
///   location, and address
/// - `ordering` - `price_per_night`, `created_at`, `bedrooms`, or
///   `max_guests`, with a `-` prefix for descending; unknown values fall back
///   to insertion order
/// - `page`, `page_size` - pagination (defaults 1 and 25)
///
/// # Errors
///
/// Returns 400 Bad Request for unparseable filter values or out-of-range
/// pagination parameters.
pub async fn list_listings_handler(
    State(state): State<AppState>,
    Query(params): Query<ListingQueryParams>,
) -> Result<Json<ListingListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|msg| AppError::bad_request(msg, json!({})))?;

    let query = params.to_query();

    let (listings, total) = state
        .listing_service
        .list_listings(&query, offset, limit)
        .await?;

    Ok(Json(ListingListResponse {
        pagination: PaginationMeta::new(
            params.pagination.page(),
            params.pagination.page_size(),
            total,
        ),
        items: listings.into_iter().map(ListingResponse::from).collect(),
    }))
}

/// Creates a listing.
///
/// # Endpoint
///
/// `POST /listings` (bearer token required)
///
/// The slug is generated server-side from the title and returned in the
/// response body.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn create_listing_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), AppError> {
    payload.validate()?;

    let listing = state.listing_service.create_listing(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(listing.into())))
}

/// Retrieves a single listing by slug.
///
/// # Endpoint
///
/// `GET /listings/{slug}`
///
/// # Errors
///
/// Returns 404 Not Found when no listing has the given slug.
pub async fn get_listing_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ListingResponse>, AppError> {
    let listing = state.listing_service.get_listing(&slug).await?;

    Ok(Json(listing.into()))
}

/// Fully replaces a listing's mutable fields.
///
/// # Endpoint
///
/// `PUT /listings/{slug}` (bearer token required)
///
/// The slug itself is immutable; replacing the title does not re-slug the
/// listing.
///
/// # Errors
///
/// Returns 404 Not Found when the slug is unknown and 400 Bad Request if
/// validation fails.
pub async fn replace_listing_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<CreateListingRequest>,
) -> Result<Json<ListingResponse>, AppError> {
    payload.validate()?;

    let listing = state
        .listing_service
        .update_listing(&slug, payload.into_full_patch())
        .await?;

    Ok(Json(listing.into()))
}

/// Partially updates a listing. Absent fields are left unchanged.
///
/// # Endpoint
///
/// `PATCH /listings/{slug}` (bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found when the slug is unknown and 400 Bad Request if
/// validation fails.
pub async fn patch_listing_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<PatchListingRequest>,
) -> Result<Json<ListingResponse>, AppError> {
    payload.validate()?;

    let listing = state
        .listing_service
        .update_listing(&slug, payload.into())
        .await?;

    Ok(Json(listing.into()))
}

/// Deletes a listing.
///
/// # Endpoint
///
/// `DELETE /listings/{slug}` (bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found when the slug is unknown.
pub async fn delete_listing_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.listing_service.delete_listing(&slug).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns up to 5 available listings, newest first.
///
/// # Endpoint
///
/// `GET /listings/featured`
///
/// The response is a bare JSON array with no pagination envelope; query
/// parameters are not honored.
pub async fn featured_listings_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ListingResponse>>, AppError> {
    let listings = state.listing_service.featured_listings().await?;

    Ok(Json(
        listings.into_iter().map(ListingResponse::from).collect(),
    ))
}
