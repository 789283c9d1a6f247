//! Listing entity representing a bookable travel property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a travel listing.
///
/// Stored as the Postgres enum `listing_type` and serialized in snake_case,
/// so filter values in query strings match the stored representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "listing_type", rename_all = "snake_case")]
pub enum ListingType {
    Apartment,
    House,
    Villa,
    Cabin,
    Hotel,
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListingType::Apartment => "apartment",
            ListingType::House => "house",
            ListingType::Villa => "villa",
            ListingType::Cabin => "cabin",
            ListingType::Hotel => "hotel",
        };
        f.write_str(s)
    }
}

/// A travel property listing.
///
/// The `slug` is the public identifier used for all single-resource lookups;
/// the numeric `id` never appears in the API surface.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub listing_type: ListingType,
    pub location: String,
    pub address: String,
    pub price_per_night: f64,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new listing.
///
/// The slug is generated by the service layer before insertion.
#[derive(Debug, Clone)]
pub struct NewListing {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub listing_type: ListingType,
    pub location: String,
    pub address: String,
    pub price_per_night: f64,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub is_available: bool,
}

/// Partial update for an existing listing.
///
/// `None` fields are left unchanged. The slug is immutable; a renamed title
/// does not re-slug an existing listing, so stored URLs stay stable.
#[derive(Debug, Clone, Default)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub listing_type: Option<ListingType>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub price_per_night: Option<f64>,
    pub max_guests: Option<i32>,
    pub bedrooms: Option<i32>,
    pub is_available: Option<bool>,
}

impl ListingPatch {
    /// Returns true when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.listing_type.is_none()
            && self.location.is_none()
            && self.address.is_none()
            && self.price_per_night.is_none()
            && self.max_guests.is_none()
            && self.bedrooms.is_none()
            && self.is_available.is_none()
    }
}
