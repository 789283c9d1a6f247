//! Application services orchestrating domain operations.

mod amenity_service;
mod auth_service;
mod listing_service;

pub use amenity_service::AmenityService;
pub use auth_service::AuthService;
pub use listing_service::{FEATURED_LIMIT, ListingInput, ListingService};
