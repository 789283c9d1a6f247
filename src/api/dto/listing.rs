//! DTOs for listing endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::api::dto::pagination::{PaginationMeta, PaginationParams};
use crate::application::services::ListingInput;
use crate::domain::entities::{Listing, ListingPatch, ListingType};
use crate::domain::listing_query::{ListingFilter, ListingOrder, ListingQuery};

fn default_is_available() -> bool {
    true
}

/// Request body for creating a listing.
///
/// The slug is never accepted from clients; it is derived from the title.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub description: String,

    pub listing_type: ListingType,

    #[validate(length(min = 1, max = 120))]
    pub location: String,

    #[validate(length(min = 1, max = 255))]
    pub address: String,

    #[validate(range(min = 0.0))]
    pub price_per_night: f64,

    #[validate(range(min = 1, max = 50))]
    pub max_guests: i32,

    #[validate(range(min = 0, max = 50))]
    pub bedrooms: i32,

    #[serde(default = "default_is_available")]
    pub is_available: bool,
}

impl From<CreateListingRequest> for ListingInput {
    fn from(req: CreateListingRequest) -> Self {
        ListingInput {
            title: req.title,
            description: req.description,
            listing_type: req.listing_type,
            location: req.location,
            address: req.address,
            price_per_night: req.price_per_night,
            max_guests: req.max_guests,
            bedrooms: req.bedrooms,
            is_available: req.is_available,
        }
    }
}

impl CreateListingRequest {
    /// Converts a full-replace request into a patch setting every field.
    pub fn into_full_patch(self) -> ListingPatch {
        ListingPatch {
            title: Some(self.title),
            description: Some(self.description),
            listing_type: Some(self.listing_type),
            location: Some(self.location),
            address: Some(self.address),
            price_per_night: Some(self.price_per_night),
            max_guests: Some(self.max_guests),
            bedrooms: Some(self.bedrooms),
            is_available: Some(self.is_available),
        }
    }
}

/// Request body for partially updating a listing.
///
/// Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct PatchListingRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    pub listing_type: Option<ListingType>,

    #[validate(length(min = 1, max = 120))]
    pub location: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub address: Option<String>,

    #[validate(range(min = 0.0))]
    pub price_per_night: Option<f64>,

    #[validate(range(min = 1, max = 50))]
    pub max_guests: Option<i32>,

    #[validate(range(min = 0, max = 50))]
    pub bedrooms: Option<i32>,

    pub is_available: Option<bool>,
}

impl From<PatchListingRequest> for ListingPatch {
    fn from(req: PatchListingRequest) -> Self {
        ListingPatch {
            title: req.title,
            description: req.description,
            listing_type: req.listing_type,
            location: req.location,
            address: req.address,
            price_per_night: req.price_per_night,
            max_guests: req.max_guests,
            bedrooms: req.bedrooms,
            is_available: req.is_available,
        }
    }
}

/// Query parameters for the listing collection endpoint.
///
/// Unknown `ordering` values are ignored (the collection falls back to
/// insertion order); unparseable filter values are rejected by the `Query`
/// extractor with a 400.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListingQueryParams {
    pub listing_type: Option<ListingType>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_available: Option<bool>,

    pub location: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub max_guests: Option<i32>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub bedrooms: Option<i32>,

    pub search: Option<String>,

    pub ordering: Option<String>,

    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ListingQueryParams {
    /// Translates the raw query parameters into the domain query model.
    pub fn to_query(&self) -> ListingQuery {
        ListingQuery {
            filter: ListingFilter {
                listing_type: self.listing_type,
                is_available: self.is_available,
                location: self.location.clone(),
                max_guests: self.max_guests,
                bedrooms: self.bedrooms,
            },
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            order: self.ordering.as_deref().and_then(ListingOrder::parse),
        }
    }
}

/// JSON representation of a listing.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
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

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            slug: listing.slug,
            title: listing.title,
            description: listing.description,
            listing_type: listing.listing_type,
            location: listing.location,
            address: listing.address,
            price_per_night: listing.price_per_night,
            max_guests: listing.max_guests,
            bedrooms: listing.bedrooms,
            is_available: listing.is_available,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

/// Paginated collection of listings.
#[derive(Debug, Serialize)]
pub struct ListingListResponse {
    pub pagination: PaginationMeta,
    pub items: Vec<ListingResponse>,
}
