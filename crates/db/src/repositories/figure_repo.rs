//! Repository for the `figures` table.

use ayiti_core::figure::encode_string_list;
use ayiti_core::slug::slugify;
use ayiti_core::types::DbId;
use sqlx::PgPool;

use crate::models::figure::{CreateFigure, Figure, UpdateFigure};

const COLUMNS: &str = "id, city_id, slug, name, title, birth_year, death_year, biography, \
                       portrait_image, quotes, achievements, is_published, created_at, updated_at";

/// Provides CRUD operations for historical figures.
pub struct FigureRepo;

impl FigureRepo {
    /// Insert a new figure. `quotes` and `achievements` are stored as JSON text.
    pub async fn create(pool: &PgPool, input: &CreateFigure) -> Result<Figure, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.name));
        let query = format!(
            "INSERT INTO figures
                (city_id, slug, name, title, birth_year, death_year, biography,
                 portrait_image, quotes, achievements, is_published)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ''), $8, $9, $10, COALESCE($11, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Figure>(&query)
            .bind(input.city_id)
            .bind(slug)
            .bind(&input.name)
            .bind(&input.title)
            .bind(input.birth_year)
            .bind(input.death_year)
            .bind(&input.biography)
            .bind(&input.portrait_image)
            .bind(encode_string_list(&input.quotes))
            .bind(encode_string_list(&input.achievements))
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Figure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM figures WHERE id = $1");
        sqlx::query_as::<_, Figure>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        city_id: DbId,
        slug: &str,
    ) -> Result<Option<Figure>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM figures WHERE city_id = $1 AND slug = $2");
        sqlx::query_as::<_, Figure>(&query)
            .bind(city_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List the figures of a city, oldest first.
    pub async fn list_by_city(
        pool: &PgPool,
        city_id: DbId,
        published_only: bool,
    ) -> Result<Vec<Figure>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM figures
             WHERE city_id = $1 AND (NOT $2 OR is_published)
             ORDER BY birth_year NULLS LAST, name"
        );
        sqlx::query_as::<_, Figure>(&query)
            .bind(city_id)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    /// Update a figure. Only non-`None` fields in `input` are applied;
    /// a supplied list replaces the stored one.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFigure,
    ) -> Result<Option<Figure>, sqlx::Error> {
        let query = format!(
            "UPDATE figures SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                title = COALESCE($4, title),
                birth_year = COALESCE($5, birth_year),
                death_year = COALESCE($6, death_year),
                biography = COALESCE($7, biography),
                portrait_image = COALESCE($8, portrait_image),
                quotes = COALESCE($9, quotes),
                achievements = COALESCE($10, achievements),
                is_published = COALESCE($11, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Figure>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.title)
            .bind(input.birth_year)
            .bind(input.death_year)
            .bind(&input.biography)
            .bind(&input.portrait_image)
            .bind(input.quotes.as_deref().map(encode_string_list))
            .bind(input.achievements.as_deref().map(encode_string_list))
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM figures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
