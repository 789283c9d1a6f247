//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AmenityService, AuthService, ListingService};

/// Application state shared across all request handlers.
///
/// Services hold trait-object repositories, so tests can swap in mock or
/// in-memory implementations without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub listing_service: Arc<ListingService>,
    pub amenity_service: Arc<AmenityService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(
        listing_service: Arc<ListingService>,
        amenity_service: Arc<AmenityService>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            listing_service,
            amenity_service,
            auth_service,
        }
    }
}
