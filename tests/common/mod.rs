#![allow(dead_code)]

//! Shared test fixtures: in-memory repositories and server construction.
//!
//! Handler tests run against the real routers and services with in-memory
//! repository implementations, so they exercise the full HTTP surface
//! without a database.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, middleware, routing::get};
use axum_test::TestServer;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use travel_listings::api::handlers::health_handler;
use travel_listings::api::middleware::auth;
use travel_listings::api::routes;
use travel_listings::application::services::{AmenityService, AuthService, ListingService};
use travel_listings::domain::entities::{
    Amenity, ApiToken, Listing, ListingPatch, ListingType, NewListing,
};
use travel_listings::domain::listing_query::{Direction, ListingQuery, OrderField};
use travel_listings::domain::repositories::{
    AmenityRepository, ListingRepository, TokenRepository,
};
use travel_listings::error::AppError;
use travel_listings::state::AppState;

/// Raw token accepted by the test token repository.
pub const TEST_TOKEN: &str = "test-token";

/// Signing secret shared by the test auth service and seeded hashes.
pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Deterministic creation timestamp: later ids are strictly newer.
fn created_at_for(id: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + id * 60, 0).unwrap()
}

// ─── Listings ────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryListingRepository {
    listings: Mutex<Vec<Listing>>,
    next_id: AtomicI64,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self {
            listings: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn matches(listing: &Listing, query: &ListingQuery) -> bool {
        let filter = &query.filter;

        if let Some(ty) = filter.listing_type {
            if listing.listing_type != ty {
                return false;
            }
        }
        if let Some(avail) = filter.is_available {
            if listing.is_available != avail {
                return false;
            }
        }
        if let Some(location) = &filter.location {
            if &listing.location != location {
                return false;
            }
        }
        if let Some(guests) = filter.max_guests {
            if listing.max_guests != guests {
                return false;
            }
        }
        if let Some(bedrooms) = filter.bedrooms {
            if listing.bedrooms != bedrooms {
                return false;
            }
        }

        if let Some(term) = &query.search {
            let term = term.to_lowercase();
            let haystacks = [
                &listing.title,
                &listing.description,
                &listing.location,
                &listing.address,
            ];
            if !haystacks.iter().any(|h| h.to_lowercase().contains(&term)) {
                return false;
            }
        }

        true
    }

    fn sort(results: &mut [Listing], query: &ListingQuery) {
        match query.order {
            Some(order) => {
                results.sort_by(|a, b| {
                    let primary = match order.field {
                        OrderField::PricePerNight => a
                            .price_per_night
                            .partial_cmp(&b.price_per_night)
                            .unwrap_or(Ordering::Equal),
                        OrderField::CreatedAt => a.created_at.cmp(&b.created_at),
                        OrderField::Bedrooms => a.bedrooms.cmp(&b.bedrooms),
                        OrderField::MaxGuests => a.max_guests.cmp(&b.max_guests),
                    };
                    let primary = match order.direction {
                        Direction::Asc => primary,
                        Direction::Desc => primary.reverse(),
                    };
                    primary.then(a.id.cmp(&b.id))
                });
            }
            None => results.sort_by_key(|l| l.id),
        }
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn insert(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        let mut listings = self.listings.lock().unwrap();

        if listings.iter().any(|l| l.slug == new_listing.slug) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "slug": new_listing.slug }),
            ));
        }

        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst);
        let now = created_at_for(id);

        let listing = Listing {
            id,
            slug: new_listing.slug,
            title: new_listing.title,
            description: new_listing.description,
            listing_type: new_listing.listing_type,
            location: new_listing.location,
            address: new_listing.address,
            price_per_night: new_listing.price_per_night,
            max_guests: new_listing.max_guests,
            bedrooms: new_listing.bedrooms,
            is_available: new_listing.is_available,
            created_at: now,
            updated_at: now,
        };

        listings.push(listing.clone());
        Ok(listing)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Listing>, AppError> {
        let listings = self.listings.lock().unwrap();
        Ok(listings.iter().find(|l| l.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        let listings = self.listings.lock().unwrap();
        Ok(listings.iter().any(|l| l.slug == slug))
    }

    async fn search(
        &self,
        query: &ListingQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Listing>, AppError> {
        let listings = self.listings.lock().unwrap();

        let mut results: Vec<Listing> = listings
            .iter()
            .filter(|l| Self::matches(l, query))
            .cloned()
            .collect();

        Self::sort(&mut results, query);

        Ok(results
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self, query: &ListingQuery) -> Result<i64, AppError> {
        let listings = self.listings.lock().unwrap();
        Ok(listings.iter().filter(|l| Self::matches(l, query)).count() as i64)
    }

    async fn featured(&self, limit: i64) -> Result<Vec<Listing>, AppError> {
        let listings = self.listings.lock().unwrap();

        let mut available: Vec<Listing> =
            listings.iter().filter(|l| l.is_available).cloned().collect();

        available.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(available.into_iter().take(limit as usize).collect())
    }

    async fn update(
        &self,
        slug: &str,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, AppError> {
        let mut listings = self.listings.lock().unwrap();

        let Some(listing) = listings.iter_mut().find(|l| l.slug == slug) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            listing.title = title;
        }
        if let Some(description) = patch.description {
            listing.description = description;
        }
        if let Some(listing_type) = patch.listing_type {
            listing.listing_type = listing_type;
        }
        if let Some(location) = patch.location {
            listing.location = location;
        }
        if let Some(address) = patch.address {
            listing.address = address;
        }
        if let Some(price_per_night) = patch.price_per_night {
            listing.price_per_night = price_per_night;
        }
        if let Some(max_guests) = patch.max_guests {
            listing.max_guests = max_guests;
        }
        if let Some(bedrooms) = patch.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(is_available) = patch.is_available {
            listing.is_available = is_available;
        }
        listing.updated_at = Utc::now();

        Ok(Some(listing.clone()))
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let mut listings = self.listings.lock().unwrap();
        let before = listings.len();
        listings.retain(|l| l.slug != slug);
        Ok(listings.len() < before)
    }
}

// ─── Amenities ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryAmenityRepository {
    amenities: Mutex<Vec<Amenity>>,
}

impl InMemoryAmenityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, id: i64, name: &str) {
        self.amenities.lock().unwrap().push(Amenity {
            id,
            name: name.to_string(),
            icon: None,
            created_at: created_at_for(id),
        });
    }
}

#[async_trait]
impl AmenityRepository for InMemoryAmenityRepository {
    async fn list(&self) -> Result<Vec<Amenity>, AppError> {
        let mut amenities = self.amenities.lock().unwrap().clone();
        amenities.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(amenities)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Amenity>, AppError> {
        let amenities = self.amenities.lock().unwrap();
        Ok(amenities.iter().find(|a| a.id == id).cloned())
    }
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct InMemoryTokenRepository {
    hashes: Mutex<HashSet<String>>,
}

impl InMemoryTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn insert(&self, name: &str, token_hash: &str) -> Result<ApiToken, AppError> {
        self.hashes.lock().unwrap().insert(token_hash.to_string());
        Ok(ApiToken {
            id: 1,
            name: name.to_string(),
            token_hash: token_hash.to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        })
    }

    async fn validate_token(&self, token_hash: &str) -> Result<bool, AppError> {
        Ok(self.hashes.lock().unwrap().contains(token_hash))
    }

    async fn update_last_used(&self, _token_hash: &str) -> Result<(), AppError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ApiToken>, AppError> {
        Ok(Vec::new())
    }

    async fn revoke(&self, _name: &str) -> Result<bool, AppError> {
        Ok(false)
    }
}

// ─── State and server construction ───────────────────────────────────────────

/// Builds application state over fresh in-memory repositories, with
/// [`TEST_TOKEN`] pre-registered for authenticated requests.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryListingRepository>,
    Arc<InMemoryAmenityRepository>,
) {
    let listing_repo = Arc::new(InMemoryListingRepository::new());
    let amenity_repo = Arc::new(InMemoryAmenityRepository::new());
    let token_repo = Arc::new(InMemoryTokenRepository::new());

    let auth_service = Arc::new(AuthService::new(
        token_repo.clone(),
        TEST_SIGNING_SECRET.to_string(),
    ));

    // Register the well-known test token.
    let hash = auth_service.hash_token(TEST_TOKEN);
    token_repo.hashes.lock().unwrap().insert(hash);

    let state = AppState::new(
        Arc::new(ListingService::new(listing_repo.clone())),
        Arc::new(AmenityService::new(amenity_repo.clone())),
        auth_service,
    );

    (state, listing_repo, amenity_repo)
}

/// Builds a test server over the real route tables, with bearer auth on the
/// protected routes. Rate limiting is left out: it keys on the peer socket
/// address, which test requests do not carry.
pub fn make_server(state: AppState) -> TestServer {
    let public = routes::public_routes();

    let protected = routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let app = Router::new()
        .route("/health", get(health_handler))
        .merge(public)
        .merge(protected)
        .with_state(state);

    TestServer::new(app).unwrap()
}

/// Inserts a listing directly into the repository, bypassing slug generation.
pub async fn seed_listing(
    repo: &InMemoryListingRepository,
    slug: &str,
    title: &str,
    listing_type: ListingType,
    location: &str,
    price_per_night: f64,
    max_guests: i32,
    bedrooms: i32,
    is_available: bool,
) -> Listing {
    repo.insert(NewListing {
        slug: slug.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        listing_type,
        location: location.to_string(),
        address: format!("1 {location} Street"),
        price_per_night,
        max_guests,
        bedrooms,
        is_available,
    })
    .await
    .unwrap()
}
