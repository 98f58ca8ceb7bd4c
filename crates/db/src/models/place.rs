//! Place entity model and DTOs.
//!
//! `kind` is stored as text constrained by `ck_places_kind`; parse it with
//! [`ayiti_core::place_kind::PlaceKind::from_str_db`] when the enum is needed.

use ayiti_core::filter::Listing;
use ayiti_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `places` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Place {
    pub id: DbId,
    pub city_id: DbId,
    pub slug: String,
    pub name: String,
    pub kind: String,
    pub description: String,
    pub price_range: Option<String>,
    pub cuisine: Option<String>,
    pub hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub booking_url: Option<String>,
    pub nightly_rate: Option<f64>,
    pub bedrooms: Option<i32>,
    pub max_guests: Option<i32>,
    pub rating: Option<f64>,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Listing for Place {
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn kind(&self) -> &str {
        &self.kind
    }
    fn price_range(&self) -> Option<&str> {
        self.price_range.as_deref()
    }
    fn cuisine(&self) -> Option<&str> {
        self.cuisine.as_deref()
    }
    fn nightly_rate(&self) -> Option<f64> {
        self.nightly_rate
    }
    fn bedrooms(&self) -> Option<i32> {
        self.bedrooms
    }
    fn max_guests(&self) -> Option<i32> {
        self.max_guests
    }
    fn rating(&self) -> Option<f64> {
        self.rating
    }
}

/// DTO for creating a place.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePlace {
    pub city_id: DbId,
    pub slug: Option<String>,
    pub name: String,
    pub kind: String,
    pub description: Option<String>,
    pub price_range: Option<String>,
    pub cuisine: Option<String>,
    pub hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub booking_url: Option<String>,
    pub nightly_rate: Option<f64>,
    pub bedrooms: Option<i32>,
    pub max_guests: Option<i32>,
    pub rating: Option<f64>,
    pub is_published: Option<bool>,
}

/// DTO for updating a place. All fields are optional; `city_id` cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlace {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    pub price_range: Option<String>,
    pub cuisine: Option<String>,
    pub hours: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub booking_url: Option<String>,
    pub nightly_rate: Option<f64>,
    pub bedrooms: Option<i32>,
    pub max_guests: Option<i32>,
    pub rating: Option<f64>,
    pub is_published: Option<bool>,
}

/// Optional filters for listing places.
#[derive(Debug, Clone, Default)]
pub struct PlaceListFilter {
    pub kind: Option<String>,
    pub city_id: Option<DbId>,
}
