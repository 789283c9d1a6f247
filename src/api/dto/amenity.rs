//! DTOs for amenity endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Amenity;

/// JSON representation of an amenity.
#[derive(Debug, Serialize)]
pub struct AmenityResponse {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Amenity> for AmenityResponse {
    fn from(amenity: Amenity) -> Self {
        Self {
            id: amenity.id,
            name: amenity.name,
            icon: amenity.icon,
            created_at: amenity.created_at,
        }
    }
}
