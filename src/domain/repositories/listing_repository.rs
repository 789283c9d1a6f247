//! Repository trait for listing data access.

use crate::domain::entities::{Listing, ListingPatch, NewListing};
use crate::domain::listing_query::ListingQuery;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for travel listings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgListingRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
/// - In-memory implementation in the integration test suite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Inserts a new listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists and
    /// [`AppError::Internal`] on database errors.
    async fn insert(&self, new_listing: NewListing) -> Result<Listing, AppError>;

    /// Finds a listing by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Listing>, AppError>;

    /// Returns true if a listing with the given slug exists.
    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError>;

    /// Returns one page of listings matching the query.
    ///
    /// Ordering defaults to insertion order (id ascending) when the query
    /// carries no explicit order.
    async fn search(
        &self,
        query: &ListingQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Listing>, AppError>;

    /// Counts all listings matching the query, ignoring pagination.
    async fn count(&self, query: &ListingQuery) -> Result<i64, AppError>;

    /// Returns up to `limit` available listings, newest first.
    async fn featured(&self, limit: i64) -> Result<Vec<Listing>, AppError>;

    /// Partially updates a listing; `None` fields are unchanged.
    ///
    /// Returns `Ok(None)` when no listing matches the slug.
    async fn update(
        &self,
        slug: &str,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, AppError>;

    /// Deletes a listing.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` when the slug is
    /// unknown.
    async fn delete(&self, slug: &str) -> Result<bool, AppError>;
}
