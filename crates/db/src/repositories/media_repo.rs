//! Repository for the `media` table.

use ayiti_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media};

const COLUMNS: &str = "id, place_id, path, alt, created_at";

/// Provides operations for place photos.
pub struct MediaRepo;

impl MediaRepo {
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (place_id, path, alt)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(input.place_id)
            .bind(&input.path)
            .bind(&input.alt)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a place's photos in upload order.
    pub async fn list_by_place(pool: &PgPool, place_id: DbId) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE place_id = $1 ORDER BY id");
        sqlx::query_as::<_, Media>(&query)
            .bind(place_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a photo row, returning it so the caller can remove the file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("DELETE FROM media WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
