//! Shared query parameter types for API handlers and pages.

use ayiti_core::types::DbId;
use serde::Deserialize;

/// `?kind=&city_id=` for `GET /api/v1/places`.
#[derive(Debug, Deserialize)]
pub struct PlaceListParams {
    pub kind: Option<String>,
    pub city_id: Option<DbId>,
}

/// `?x=&y=` in map viewbox coordinates.
#[derive(Debug, Deserialize)]
pub struct MapPointParams {
    pub x: f64,
    pub y: f64,
}
