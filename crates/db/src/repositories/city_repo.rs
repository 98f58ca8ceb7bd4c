//! Repository for the `cities` table.

use ayiti_core::slug::slugify;
use ayiti_core::types::DbId;
use sqlx::PgPool;

use crate::models::city::{City, CreateCity, UpdateCity};

const COLUMNS: &str = "id, department_id, slug, name, intro, hero_image, latitude, longitude, \
                       is_published, created_at, updated_at";

/// Provides CRUD operations for cities.
pub struct CityRepo;

impl CityRepo {
    /// Insert a new city. Slugs are unique per department (`uq_cities_department_slug`).
    pub async fn create(pool: &PgPool, input: &CreateCity) -> Result<City, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.name));
        let query = format!(
            "INSERT INTO cities
                (department_id, slug, name, intro, hero_image, latitude, longitude, is_published)
             VALUES ($1, $2, $3, COALESCE($4, ''), $5, $6, $7, COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(input.department_id)
            .bind(slug)
            .bind(&input.name)
            .bind(&input.intro)
            .bind(&input.hero_image)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE id = $1");
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// True when the city and its department are both published.
    pub async fn is_listed(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM cities c
                JOIN departments d ON d.id = c.department_id
                WHERE c.id = $1 AND c.is_published AND d.is_published
             )",
        )
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Find a city by slug within its department.
    pub async fn find_by_slug(
        pool: &PgPool,
        department_id: DbId,
        slug: &str,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cities WHERE department_id = $1 AND slug = $2");
        sqlx::query_as::<_, City>(&query)
            .bind(department_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List the cities of a department ordered by name.
    pub async fn list_by_department(
        pool: &PgPool,
        department_id: DbId,
        published_only: bool,
    ) -> Result<Vec<City>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cities
             WHERE department_id = $1 AND (NOT $2 OR is_published)
             ORDER BY name"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(department_id)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    /// Update a city. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCity,
    ) -> Result<Option<City>, sqlx::Error> {
        let query = format!(
            "UPDATE cities SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                intro = COALESCE($4, intro),
                hero_image = COALESCE($5, hero_image),
                latitude = COALESCE($6, latitude),
                longitude = COALESCE($7, longitude),
                is_published = COALESCE($8, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, City>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.intro)
            .bind(&input.hero_image)
            .bind(input.latitude)
            .bind(input.longitude)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
