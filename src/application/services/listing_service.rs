//! Listing CRUD orchestration and slug assignment.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Listing, ListingPatch, NewListing};
use crate::domain::listing_query::ListingQuery;
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;
use crate::utils::slug::{slugify, with_random_suffix};

/// Number of listings returned by the featured endpoint.
pub const FEATURED_LIMIT: i64 = 5;

/// Maximum slug collision retries before giving up.
const MAX_SLUG_ATTEMPTS: usize = 10;

/// Input for creating a listing, before a slug has been assigned.
#[derive(Debug, Clone)]
pub struct ListingInput {
    pub title: String,
    pub description: String,
    pub listing_type: crate::domain::entities::ListingType,
    pub location: String,
    pub address: String,
    pub price_per_night: f64,
    pub max_guests: i32,
    pub bedrooms: i32,
    pub is_available: bool,
}

/// Service for creating, querying, and mutating listings.
///
/// Owns slug assignment: slugs are derived from the title and made unique
/// with a random suffix on collision, so concurrent creates with identical
/// titles both succeed.
pub struct ListingService {
    repository: Arc<dyn ListingRepository>,
}

impl ListingService {
    pub fn new(repository: Arc<dyn ListingRepository>) -> Self {
        Self { repository }
    }

    /// Creates a listing, generating a unique slug from the title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a unique slug cannot be found after
    /// bounded retries, or on database errors.
    pub async fn create_listing(&self, input: ListingInput) -> Result<Listing, AppError> {
        let slug = self.generate_unique_slug(&input.title).await?;

        let new_listing = NewListing {
            slug,
            title: input.title,
            description: input.description,
            listing_type: input.listing_type,
            location: input.location,
            address: input.address,
            price_per_night: input.price_per_night,
            max_guests: input.max_guests,
            bedrooms: input.bedrooms,
            is_available: input.is_available,
        };

        self.repository.insert(new_listing).await
    }

    /// Retrieves a listing by slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing has the given slug.
    pub async fn get_listing(&self, slug: &str) -> Result<Listing, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found", json!({ "slug": slug })))
    }

    /// Returns one page of listings matching the query, plus the total match
    /// count for pagination metadata.
    pub async fn list_listings(
        &self,
        query: &ListingQuery,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Listing>, i64), AppError> {
        let items = self.repository.search(query, offset, limit).await?;
        let total = self.repository.count(query).await?;
        Ok((items, total))
    }

    /// Returns up to [`FEATURED_LIMIT`] available listings, newest first.
    pub async fn featured_listings(&self) -> Result<Vec<Listing>, AppError> {
        self.repository.featured(FEATURED_LIMIT).await
    }

    /// Applies a partial update to a listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing has the given slug.
    pub async fn update_listing(
        &self,
        slug: &str,
        patch: ListingPatch,
    ) -> Result<Listing, AppError> {
        self.repository
            .update(slug, patch)
            .await?
            .ok_or_else(|| AppError::not_found("Listing not found", json!({ "slug": slug })))
    }

    /// Deletes a listing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing has the given slug.
    pub async fn delete_listing(&self, slug: &str) -> Result<(), AppError> {
        let deleted = self.repository.delete(slug).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Listing not found",
                json!({ "slug": slug }),
            ));
        }

        Ok(())
    }

    /// Derives a slug from the title, retrying with random suffixes while the
    /// candidate is taken.
    async fn generate_unique_slug(&self, title: &str) -> Result<String, AppError> {
        let base = slugify(title);

        if !self.repository.slug_exists(&base).await? {
            return Ok(base);
        }

        for _ in 0..MAX_SLUG_ATTEMPTS {
            let candidate = with_random_suffix(&base);

            if !self.repository.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(AppError::internal(
            "Failed to generate unique slug",
            json!({ "reason": "Too many collisions", "base": base }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ListingType;
    use crate::domain::repositories::MockListingRepository;
    use chrono::Utc;

    fn sample_input(title: &str) -> ListingInput {
        ListingInput {
            title: title.to_string(),
            description: "A lovely place".to_string(),
            listing_type: ListingType::Cabin,
            location: "Innsbruck".to_string(),
            address: "1 Bergweg".to_string(),
            price_per_night: 120.0,
            max_guests: 4,
            bedrooms: 2,
            is_available: true,
        }
    }

    fn sample_listing(id: i64, slug: &str) -> Listing {
        Listing {
            id,
            slug: slug.to_string(),
            title: "Cozy Cabin".to_string(),
            description: "A lovely place".to_string(),
            listing_type: ListingType::Cabin,
            location: "Innsbruck".to_string(),
            address: "1 Bergweg".to_string(),
            price_per_night: 120.0,
            max_guests: 4,
            bedrooms: 2,
            is_available: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_listing_uses_title_slug() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_slug_exists()
            .withf(|slug| slug == "cozy-cabin")
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_insert()
            .withf(|new_listing| new_listing.slug == "cozy-cabin")
            .times(1)
            .returning(|_| Ok(sample_listing(1, "cozy-cabin")));

        let service = ListingService::new(Arc::new(mock_repo));

        let listing = service.create_listing(sample_input("Cozy Cabin")).await.unwrap();
        assert_eq!(listing.slug, "cozy-cabin");
    }

    #[tokio::test]
    async fn test_create_listing_retries_on_slug_collision() {
        let mut mock_repo = MockListingRepository::new();

        // Base slug taken, first suffixed candidate free.
        mock_repo
            .expect_slug_exists()
            .withf(|slug| slug == "cozy-cabin")
            .times(1)
            .returning(|_| Ok(true));

        mock_repo
            .expect_slug_exists()
            .withf(|slug| slug.starts_with("cozy-cabin-"))
            .times(1)
            .returning(|_| Ok(false));

        mock_repo
            .expect_insert()
            .withf(|new_listing| new_listing.slug.starts_with("cozy-cabin-"))
            .times(1)
            .returning(|new_listing| {
                let mut listing = sample_listing(2, "x");
                listing.slug = new_listing.slug.clone();
                Ok(listing)
            });

        let service = ListingService::new(Arc::new(mock_repo));

        let listing = service.create_listing(sample_input("Cozy Cabin")).await.unwrap();
        assert!(listing.slug.starts_with("cozy-cabin-"));
    }

    #[tokio::test]
    async fn test_create_listing_gives_up_after_max_attempts() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_slug_exists()
            .times(1 + MAX_SLUG_ATTEMPTS)
            .returning(|_| Ok(true));

        mock_repo.expect_insert().times(0);

        let service = ListingService::new(Arc::new(mock_repo));

        let result = service.create_listing(sample_input("Cozy Cabin")).await;
        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_get_listing_not_found() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_find_by_slug()
            .times(1)
            .returning(|_| Ok(None));

        let service = ListingService::new(Arc::new(mock_repo));

        let result = service.get_listing("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_featured_passes_limit() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_featured()
            .withf(|limit| *limit == FEATURED_LIMIT)
            .times(1)
            .returning(|_| Ok(vec![sample_listing(1, "a"), sample_listing(2, "b")]));

        let service = ListingService::new(Arc::new(mock_repo));

        let featured = service.featured_listings().await.unwrap();
        assert_eq!(featured.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_listing_not_found() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = ListingService::new(Arc::new(mock_repo));

        let result = service.delete_listing("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_listing_not_found() {
        let mut mock_repo = MockListingRepository::new();

        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = ListingService::new(Arc::new(mock_repo));

        let result = service
            .update_listing("missing", ListingPatch::default())
            .await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
