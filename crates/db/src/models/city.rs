//! City entity model and DTOs.

use ayiti_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `cities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct City {
    pub id: DbId,
    pub department_id: DbId,
    pub slug: String,
    pub name: String,
    pub intro: String,
    pub hero_image: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCity {
    pub department_id: DbId,
    pub slug: Option<String>,
    pub name: String,
    pub intro: Option<String>,
    pub hero_image: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCity {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub intro: Option<String>,
    pub hero_image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_published: Option<bool>,
}
