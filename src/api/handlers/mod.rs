//! HTTP request handlers.

mod amenities;
mod health;
mod listings;

pub use amenities::{get_amenity_handler, list_amenities_handler};
pub use health::health_handler;
pub use listings::{
    create_listing_handler, delete_listing_handler, featured_listings_handler,
    get_listing_handler, list_listings_handler, patch_listing_handler, replace_listing_handler,
};
