//! Repository for the `places` table.

use ayiti_core::slug::slugify;
use ayiti_core::types::DbId;
use sqlx::PgPool;

use crate::models::place::{CreatePlace, Place, PlaceListFilter, UpdatePlace};

const COLUMNS: &str = "id, city_id, slug, name, kind, description, price_range, cuisine, hours, \
                       latitude, longitude, phone, website, booking_url, nightly_rate, bedrooms, \
                       max_guests, rating, is_published, created_at, updated_at";

/// Provides CRUD operations for places.
pub struct PlaceRepo;

impl PlaceRepo {
    /// Insert a new place, returning the created row.
    ///
    /// `kind` is checked by `ck_places_kind`; callers validate it first for a
    /// friendlier error.
    pub async fn create(pool: &PgPool, input: &CreatePlace) -> Result<Place, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.name));
        let query = format!(
            "INSERT INTO places
                (city_id, slug, name, kind, description, price_range, cuisine, hours,
                 latitude, longitude, phone, website, booking_url, nightly_rate, bedrooms,
                 max_guests, rating, is_published)
             VALUES ($1, $2, $3, $4, COALESCE($5, ''), $6, $7, $8,
                     $9, $10, $11, $12, $13, $14, $15,
                     $16, $17, COALESCE($18, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(input.city_id)
            .bind(slug)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(&input.price_range)
            .bind(&input.cuisine)
            .bind(&input.hours)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.booking_url)
            .bind(input.nightly_rate)
            .bind(input.bedrooms)
            .bind(input.max_guests)
            .bind(input.rating)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE id = $1");
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a place by slug within its city.
    pub async fn find_by_slug(
        pool: &PgPool,
        city_id: DbId,
        slug: &str,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM places WHERE city_id = $1 AND slug = $2");
        sqlx::query_as::<_, Place>(&query)
            .bind(city_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List places ordered by name, optionally narrowed by kind and city.
    pub async fn list(
        pool: &PgPool,
        filter: &PlaceListFilter,
        published_only: bool,
    ) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places
             WHERE ($1::text IS NULL OR kind = $1)
               AND ($2::bigint IS NULL OR city_id = $2)
               AND (NOT $3 OR is_published)
             ORDER BY name"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(&filter.kind)
            .bind(filter.city_id)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    /// List the places of a city ordered by kind, then name.
    pub async fn list_by_city(
        pool: &PgPool,
        city_id: DbId,
        published_only: bool,
    ) -> Result<Vec<Place>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM places
             WHERE city_id = $1 AND (NOT $2 OR is_published)
             ORDER BY kind, name"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(city_id)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    /// Update a place. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlace,
    ) -> Result<Option<Place>, sqlx::Error> {
        let query = format!(
            "UPDATE places SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                kind = COALESCE($4, kind),
                description = COALESCE($5, description),
                price_range = COALESCE($6, price_range),
                cuisine = COALESCE($7, cuisine),
                hours = COALESCE($8, hours),
                latitude = COALESCE($9, latitude),
                longitude = COALESCE($10, longitude),
                phone = COALESCE($11, phone),
                website = COALESCE($12, website),
                booking_url = COALESCE($13, booking_url),
                nightly_rate = COALESCE($14, nightly_rate),
                bedrooms = COALESCE($15, bedrooms),
                max_guests = COALESCE($16, max_guests),
                rating = COALESCE($17, rating),
                is_published = COALESCE($18, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Place>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.kind)
            .bind(&input.description)
            .bind(&input.price_range)
            .bind(&input.cuisine)
            .bind(&input.hours)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.booking_url)
            .bind(input.nightly_rate)
            .bind(input.bedrooms)
            .bind(input.max_guests)
            .bind(input.rating)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a place and its media rows. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
