//! Handlers for the `/places` resource and booking quotes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ayiti_core::booking::{self, BookingQuote};
use ayiti_core::error::CoreError;
use ayiti_core::place_kind::{validate_price_range, PlaceKind};
use ayiti_core::slug::resolve_slug;
use ayiti_core::types::DbId;
use ayiti_db::models::place::{CreatePlace, Place, PlaceListFilter, UpdatePlace};
use ayiti_db::repositories::{CityRepo, PlaceRepo};
use chrono::NaiveDate;
use serde::Deserialize;

use super::{require_name, validate_optional_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::query::PlaceListParams;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Place", id })
}

/// Published place whose city and department are published too.
pub(crate) async fn find_published(state: &AppState, id: DbId) -> AppResult<Place> {
    let place = PlaceRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|p| p.is_published)
        .ok_or_else(|| not_found(id))?;
    if !CityRepo::is_listed(&state.pool, place.city_id).await? {
        return Err(not_found(id));
    }
    Ok(place)
}

/// Field checks shared by create and update. `None` means "not supplied".
fn validate_place_fields(
    kind: Option<&str>,
    price_range: Option<&str>,
    rating: Option<f64>,
    nightly_rate: Option<f64>,
    max_guests: Option<i32>,
) -> Result<(), CoreError> {
    if let Some(kind) = kind {
        PlaceKind::from_str_db(kind)?;
    }
    if let Some(tag) = price_range {
        validate_price_range(tag)?;
    }
    if rating.is_some_and(|r| !(0.0..=5.0).contains(&r)) {
        return Err(CoreError::Validation("rating must be between 0 and 5".into()));
    }
    if nightly_rate.is_some_and(|r| !r.is_finite() || r <= 0.0) {
        return Err(CoreError::Validation("nightly_rate must be a positive amount".into()));
    }
    if max_guests.is_some_and(|n| n < 1) {
        return Err(CoreError::Validation("max_guests must be at least 1".into()));
    }
    Ok(())
}

/// GET /api/v1/places
///
/// Optional `?kind=` and `?city_id=` narrow the list. Ordered by name.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PlaceListParams>,
) -> AppResult<Json<DataResponse<Vec<Place>>>> {
    if let Some(kind) = &params.kind {
        PlaceKind::from_str_db(kind)?;
    }
    let filter = PlaceListFilter {
        kind: params.kind,
        city_id: params.city_id,
    };
    let places = PlaceRepo::list(&state.pool, &filter, true).await?;
    Ok(Json(DataResponse { data: places }))
}

/// GET /api/v1/places/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Place>> {
    Ok(Json(find_published(&state, id).await?))
}

/// POST /api/v1/places
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(mut input): Json<CreatePlace>,
) -> AppResult<(StatusCode, Json<Place>)> {
    require_name(&input.name)?;
    validate_place_fields(
        Some(&input.kind),
        input.price_range.as_deref(),
        input.rating,
        input.nightly_rate,
        input.max_guests,
    )?;
    input.slug = Some(resolve_slug(input.slug.as_deref(), &input.name)?);

    let place = PlaceRepo::create(&state.pool, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        place_id = place.id,
        kind = %place.kind,
        "Place created"
    );
    Ok((StatusCode::CREATED, Json(place)))
}

/// PUT /api/v1/places/{id}
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlace>,
) -> AppResult<Json<Place>> {
    validate_optional_slug(input.slug.as_deref())?;
    if let Some(name) = &input.name {
        require_name(name)?;
    }
    validate_place_fields(
        input.kind.as_deref(),
        input.price_range.as_deref(),
        input.rating,
        input.nightly_rate,
        input.max_guests,
    )?;
    let place = PlaceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(place))
}

/// DELETE /api/v1/places/{id}
///
/// Photo rows go with the place; files on disk are left for cleanup.
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if PlaceRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, place_id = id, "Place deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// Request body for `POST /places/{id}/booking-quote`.
#[derive(Debug, Deserialize)]
pub struct BookingQuoteRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_guests")]
    pub guests: u32,
}

fn default_guests() -> u32 {
    1
}

/// POST /api/v1/places/{id}/booking-quote
///
/// Prices a stay at the place's nightly rate. Nothing is reserved.
pub async fn booking_quote(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<BookingQuoteRequest>,
) -> AppResult<Json<DataResponse<BookingQuote>>> {
    let place = find_published(&state, id).await?;
    let nightly_rate = place.nightly_rate.ok_or_else(|| {
        CoreError::Validation(format!("{} does not take nightly bookings", place.name))
    })?;
    let max_guests = place.max_guests.and_then(|n| u32::try_from(n).ok());

    let quote = booking::quote(
        input.check_in,
        input.check_out,
        nightly_rate,
        input.guests,
        max_guests,
    )?;
    tracing::debug!(place_id = id, nights = quote.nights, total = quote.total, "Booking quoted");
    Ok(Json(DataResponse { data: quote }))
}
