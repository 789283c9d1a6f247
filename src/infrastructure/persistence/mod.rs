//! PostgreSQL repository implementations.

mod pg_amenity_repository;
mod pg_listing_repository;
mod pg_token_repository;

pub use pg_amenity_repository::PgAmenityRepository;
pub use pg_listing_repository::PgListingRepository;
pub use pg_token_repository::PgTokenRepository;
