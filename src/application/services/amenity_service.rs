//! Amenity read access.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::Amenity;
use crate::domain::repositories::AmenityRepository;
use crate::error::AppError;

/// Read-only service over amenity reference data.
pub struct AmenityService {
    repository: Arc<dyn AmenityRepository>,
}

impl AmenityService {
    pub fn new(repository: Arc<dyn AmenityRepository>) -> Self {
        Self { repository }
    }

    /// Lists all amenities.
    pub async fn list_amenities(&self) -> Result<Vec<Amenity>, AppError> {
        self.repository.list().await
    }

    /// Retrieves an amenity by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no amenity has the given id.
    pub async fn get_amenity(&self, id: i64) -> Result<Amenity, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Amenity not found", json!({ "id": id })))
    }
}
