//! PostgreSQL implementation of the listing repository.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use std::sync::Arc;

use crate::domain::entities::{Listing, ListingPatch, NewListing};
use crate::domain::listing_query::{Direction, ListingQuery};
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

const LISTING_COLUMNS: &str = "id, slug, title, description, listing_type, location, address, \
     price_per_night, max_guests, bedrooms, is_available, created_at, updated_at";

/// PostgreSQL repository for listing storage and retrieval.
///
/// Filter and ordering clauses are assembled with [`QueryBuilder`]; every
/// user-supplied value is bound as a parameter and ordering columns come from
/// a closed enum, so no request input is interpolated into SQL.
pub struct PgListingRepository {
    pool: Arc<PgPool>,
}

impl PgListingRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Appends WHERE clauses for the query's filters and search term.
    ///
    /// The builder must already contain `WHERE TRUE` so every condition can
    /// be appended uniformly with `AND`.
    fn push_conditions(builder: &mut QueryBuilder<'_, Postgres>, query: &ListingQuery) {
        let filter = &query.filter;

        if let Some(listing_type) = filter.listing_type {
            builder.push(" AND listing_type = ").push_bind(listing_type);
        }

        if let Some(is_available) = filter.is_available {
            builder.push(" AND is_available = ").push_bind(is_available);
        }

        if let Some(location) = &filter.location {
            builder.push(" AND location = ").push_bind(location.clone());
        }

        if let Some(max_guests) = filter.max_guests {
            builder.push(" AND max_guests = ").push_bind(max_guests);
        }

        if let Some(bedrooms) = filter.bedrooms {
            builder.push(" AND bedrooms = ").push_bind(bedrooms);
        }

        if let Some(term) = &query.search {
            let pattern = format!("%{}%", escape_like(term));
            builder
                .push(" AND (title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR description ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR location ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR address ILIKE ")
                .push_bind(pattern)
                .push(")");
        }
    }
}

/// Escapes LIKE wildcards so search terms match literally.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn insert(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        let listing = sqlx::query_as::<_, Listing>(
            r#"
            INSERT INTO listings
                (slug, title, description, listing_type, location, address,
                 price_per_night, max_guests, bedrooms, is_available)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&new_listing.slug)
        .bind(&new_listing.title)
        .bind(&new_listing.description)
        .bind(new_listing.listing_type)
        .bind(&new_listing.location)
        .bind(&new_listing.address)
        .bind(new_listing.price_per_night)
        .bind(new_listing.max_guests)
        .bind(new_listing.bedrooms)
        .bind(new_listing.is_available)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(listing)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Listing>, AppError> {
        let listing = sqlx::query_as::<_, Listing>(
            "SELECT * FROM listings WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(listing)
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM listings WHERE slug = $1)")
                .bind(slug)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn search(
        &self,
        query: &ListingQuery,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Listing>, AppError> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {LISTING_COLUMNS} FROM listings WHERE TRUE"
        ));

        Self::push_conditions(&mut builder, query);

        match query.order {
            Some(order) => {
                let direction = match order.direction {
                    Direction::Asc => "ASC",
                    Direction::Desc => "DESC",
                };
                // Secondary sort on id keeps pagination stable across ties.
                builder.push(format!(
                    " ORDER BY {} {direction}, id ASC",
                    order.field.column()
                ));
            }
            None => {
                builder.push(" ORDER BY id ASC");
            }
        }

        builder
            .push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset);

        let listings = builder
            .build_query_as::<Listing>()
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(listings)
    }

    async fn count(&self, query: &ListingQuery) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM listings WHERE TRUE");

        Self::push_conditions(&mut builder, query);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn featured(&self, limit: i64) -> Result<Vec<Listing>, AppError> {
        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT * FROM listings
            WHERE is_available = TRUE
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(listings)
    }

    async fn update(
        &self,
        slug: &str,
        patch: ListingPatch,
    ) -> Result<Option<Listing>, AppError> {
        let mut builder = QueryBuilder::new("UPDATE listings SET updated_at = NOW()");

        if let Some(title) = &patch.title {
            builder.push(", title = ").push_bind(title.clone());
        }
        if let Some(description) = &patch.description {
            builder.push(", description = ").push_bind(description.clone());
        }
        if let Some(listing_type) = patch.listing_type {
            builder.push(", listing_type = ").push_bind(listing_type);
        }
        if let Some(location) = &patch.location {
            builder.push(", location = ").push_bind(location.clone());
        }
        if let Some(address) = &patch.address {
            builder.push(", address = ").push_bind(address.clone());
        }
        if let Some(price_per_night) = patch.price_per_night {
            builder.push(", price_per_night = ").push_bind(price_per_night);
        }
        if let Some(max_guests) = patch.max_guests {
            builder.push(", max_guests = ").push_bind(max_guests);
        }
        if let Some(bedrooms) = patch.bedrooms {
            builder.push(", bedrooms = ").push_bind(bedrooms);
        }
        if let Some(is_available) = patch.is_available {
            builder.push(", is_available = ").push_bind(is_available);
        }

        builder
            .push(" WHERE slug = ")
            .push_bind(slug.to_string())
            .push(" RETURNING *");

        let listing = builder
            .build_query_as::<Listing>()
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(listing)
    }

    async fn delete(&self, slug: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM listings WHERE slug = $1")
            .bind(slug)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
