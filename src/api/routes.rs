//! API route configuration.
//!
//! Routes are split into a public (anonymous read) set and a protected set
//! that the top-level router wraps with bearer authentication.

use crate::api::handlers::{
    create_listing_handler, delete_listing_handler, featured_listings_handler,
    get_amenity_handler, get_listing_handler, list_amenities_handler, list_listings_handler,
    patch_listing_handler, replace_listing_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Read routes, open to anonymous callers.
///
/// # Endpoints
///
/// - `GET /listings`           - Filtered/searched/ordered paginated collection
/// - `GET /listings/featured`  - Up to 5 available listings
/// - `GET /listings/{slug}`    - Listing detail
/// - `GET /amenities`          - All amenities
/// - `GET /amenities/{id}`     - Amenity detail
///
/// `/listings/featured` is registered as a static segment, so it always wins
/// over the `{slug}` capture.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", get(list_listings_handler))
        .route("/listings/featured", get(featured_listings_handler))
        .route("/listings/{slug}", get(get_listing_handler))
        .route("/amenities", get(list_amenities_handler))
        .route("/amenities/{id}", get(get_amenity_handler))
}

/// Write routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /listings`        - Create a listing
/// - `PUT    /listings/{slug}` - Replace a listing
/// - `PATCH  /listings/{slug}` - Partially update a listing
/// - `DELETE /listings/{slug}` - Delete a listing
///
/// Amenities expose no write routes at all; non-GET amenity requests get 405
/// from the method router.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/listings", post(create_listing_handler))
        .route(
            "/listings/{slug}",
            axum::routing::put(replace_listing_handler)
                .patch(patch_listing_handler)
                .delete(delete_listing_handler),
        )
}
