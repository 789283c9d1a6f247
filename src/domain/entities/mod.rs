//! Core business entities.

mod amenity;
mod api_token;
mod listing;

pub use amenity::Amenity;
pub use api_token::ApiToken;
pub use listing::{Listing, ListingPatch, ListingType, NewListing};
