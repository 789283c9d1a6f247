//! Repository trait for amenity data access.

use crate::domain::entities::Amenity;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only repository interface for amenities.
///
/// The API never writes amenities, so the trait exposes no mutating
/// operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    /// Lists all amenities ordered by name.
    async fn list(&self) -> Result<Vec<Amenity>, AppError>;

    /// Finds an amenity by its numeric id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Amenity>, AppError>;
}
