//! Department entity model and DTOs.

use ayiti_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub intro: String,
    pub hero_image: Option<String>,
    pub capital: Option<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a department. `slug` is derived from `name` when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepartment {
    pub slug: Option<String>,
    pub name: String,
    pub intro: Option<String>,
    pub hero_image: Option<String>,
    pub capital: Option<String>,
    pub is_published: Option<bool>,
}

/// DTO for updating a department. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepartment {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub intro: Option<String>,
    pub hero_image: Option<String>,
    pub capital: Option<String>,
    pub is_published: Option<bool>,
}
