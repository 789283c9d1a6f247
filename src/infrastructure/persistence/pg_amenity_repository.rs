//! PostgreSQL implementation of the amenity repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::Amenity;
use crate::domain::repositories::AmenityRepository;
use crate::error::AppError;

/// PostgreSQL repository for amenity reference data.
pub struct PgAmenityRepository {
    pool: Arc<PgPool>,
}

impl PgAmenityRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmenityRepository for PgAmenityRepository {
    async fn list(&self) -> Result<Vec<Amenity>, AppError> {
        let amenities = sqlx::query_as::<_, Amenity>(
            "SELECT id, name, icon, created_at FROM amenities ORDER BY name ASC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(amenities)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Amenity>, AppError> {
        let amenity = sqlx::query_as::<_, Amenity>(
            "SELECT id, name, icon, created_at FROM amenities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(amenity)
    }
}
