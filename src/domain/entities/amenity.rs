//! Amenity entity for property features (wifi, pool, parking, ...).

use chrono::{DateTime, Utc};

/// A property amenity.
///
/// Amenities are reference data: the API exposes them read-only and they are
/// maintained directly in the database.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Amenity {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}
