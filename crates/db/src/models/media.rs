//! Place photo model.

use ayiti_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `media` table. `path` is the public URL path under `/uploads`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub place_id: DbId,
    pub path: String,
    pub alt: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub place_id: DbId,
    pub path: String,
    pub alt: String,
}
