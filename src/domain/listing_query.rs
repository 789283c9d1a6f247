//! Query model for the listing collection endpoint.
//!
//! Translates the API's filter/search/ordering parameters into a
//! storage-agnostic description that repositories turn into SQL (or, in
//! tests, into in-memory predicates).

use crate::domain::entities::ListingType;

/// Exact-match filters applied with logical AND.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    pub listing_type: Option<ListingType>,
    pub is_available: Option<bool>,
    pub location: Option<String>,
    pub max_guests: Option<i32>,
    pub bedrooms: Option<i32>,
}

/// Field a listing collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    PricePerNight,
    CreatedAt,
    Bedrooms,
    MaxGuests,
}

impl OrderField {
    /// The column name used in SQL ORDER BY clauses.
    ///
    /// Restricted to this closed set so ordering input can never inject SQL.
    pub fn column(self) -> &'static str {
        match self {
            OrderField::PricePerNight => "price_per_night",
            OrderField::CreatedAt => "created_at",
            OrderField::Bedrooms => "bedrooms",
            OrderField::MaxGuests => "max_guests",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// A parsed `ordering` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingOrder {
    pub field: OrderField,
    pub direction: Direction,
}

impl ListingOrder {
    /// Parses an ordering expression: a field name with an optional `-`
    /// prefix for descending (`price_per_night`, `-created_at`, ...).
    ///
    /// Returns `None` for unknown field names; callers fall back to the
    /// default insertion order rather than rejecting the request.
    pub fn parse(raw: &str) -> Option<Self> {
        let (direction, name) = match raw.strip_prefix('-') {
            Some(rest) => (Direction::Desc, rest),
            None => (Direction::Asc, raw),
        };

        let field = match name {
            "price_per_night" => OrderField::PricePerNight,
            "created_at" => OrderField::CreatedAt,
            "bedrooms" => OrderField::Bedrooms,
            "max_guests" => OrderField::MaxGuests,
            _ => return None,
        };

        Some(Self { field, direction })
    }
}

/// Complete description of a listing collection request, minus pagination.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    /// Free-text term matched case-insensitively against title, description,
    /// location, and address.
    pub search: Option<String>,
    /// `None` means default order: insertion order (id ascending).
    pub order: Option<ListingOrder>,
}
