//! Historical figure model and DTOs.

use ayiti_core::figure::decode_string_list;
use ayiti_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `figures` table.
///
/// `quotes` and `achievements` hold serialized JSON string arrays; use
/// [`Figure::quote_list`] and [`Figure::achievement_list`] to read them.
#[derive(Debug, Clone, FromRow)]
pub struct Figure {
    pub id: DbId,
    pub city_id: DbId,
    pub slug: String,
    pub name: String,
    pub title: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub biography: String,
    pub portrait_image: Option<String>,
    pub quotes: String,
    pub achievements: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Figure {
    pub fn quote_list(&self) -> Vec<String> {
        decode_string_list(Some(&self.quotes))
    }

    pub fn achievement_list(&self) -> Vec<String> {
        decode_string_list(Some(&self.achievements))
    }
}

/// API representation with the JSON text columns decoded into lists.
#[derive(Debug, Clone, Serialize)]
pub struct FigureResponse {
    pub id: DbId,
    pub city_id: DbId,
    pub slug: String,
    pub name: String,
    pub title: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub biography: String,
    pub portrait_image: Option<String>,
    pub quotes: Vec<String>,
    pub achievements: Vec<String>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Figure> for FigureResponse {
    fn from(f: Figure) -> Self {
        let quotes = f.quote_list();
        let achievements = f.achievement_list();
        Self {
            id: f.id,
            city_id: f.city_id,
            slug: f.slug,
            name: f.name,
            title: f.title,
            birth_year: f.birth_year,
            death_year: f.death_year,
            biography: f.biography,
            portrait_image: f.portrait_image,
            quotes,
            achievements,
            is_published: f.is_published,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

/// DTO for creating a figure. Lists are encoded by the repository.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateFigure {
    pub city_id: DbId,
    pub slug: Option<String>,
    pub name: String,
    pub title: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub biography: Option<String>,
    pub portrait_image: Option<String>,
    #[serde(default)]
    pub quotes: Vec<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateFigure {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub biography: Option<String>,
    pub portrait_image: Option<String>,
    pub quotes: Option<Vec<String>>,
    pub achievements: Option<Vec<String>>,
    pub is_published: Option<bool>,
}
