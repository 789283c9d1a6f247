//! Repository traits defining the persistence boundary.

mod amenity_repository;
mod listing_repository;
mod token_repository;

pub use amenity_repository::AmenityRepository;
pub use listing_repository::ListingRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use amenity_repository::MockAmenityRepository;
#[cfg(test)]
pub use listing_repository::MockListingRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
