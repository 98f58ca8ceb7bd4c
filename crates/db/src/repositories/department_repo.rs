//! Repository for the `departments` table.

use ayiti_core::slug::slugify;
use ayiti_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::{CreateDepartment, Department, UpdateDepartment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, slug, name, intro, hero_image, capital, is_published, created_at, updated_at";

/// Provides CRUD operations for departments.
pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Insert a new department, returning the created row.
    ///
    /// A missing `slug` is derived from `name`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDepartment,
    ) -> Result<Department, sqlx::Error> {
        let slug = input.slug.clone().unwrap_or_else(|| slugify(&input.name));
        let query = format!(
            "INSERT INTO departments (slug, name, intro, hero_image, capital, is_published)
             VALUES ($1, $2, COALESCE($3, ''), $4, $5, COALESCE($6, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(slug)
            .bind(&input.name)
            .bind(&input.intro)
            .bind(&input.hero_image)
            .bind(&input.capital)
            .bind(input.is_published)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE slug = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List departments ordered by name.
    pub async fn list(pool: &PgPool, published_only: bool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments
             WHERE (NOT $1 OR is_published)
             ORDER BY name"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(published_only)
            .fetch_all(pool)
            .await
    }

    /// Update a department. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDepartment,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!(
            "UPDATE departments SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                intro = COALESCE($4, intro),
                hero_image = COALESCE($5, hero_image),
                capital = COALESCE($6, capital),
                is_published = COALESCE($7, is_published)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.intro)
            .bind(&input.hero_image)
            .bind(&input.capital)
            .bind(input.is_published)
            .fetch_optional(pool)
            .await
    }

    /// Delete a department and, by cascade, its cities and their content.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
