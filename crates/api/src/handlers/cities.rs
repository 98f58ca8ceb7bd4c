//! Handlers for the `/cities` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ayiti_core::error::CoreError;
use ayiti_core::slug::resolve_slug;
use ayiti_core::types::DbId;
use ayiti_db::models::city::{City, CreateCity, UpdateCity};
use ayiti_db::models::figure::FigureResponse;
use ayiti_db::models::place::Place;
use ayiti_db::repositories::{CityRepo, FigureRepo, PlaceRepo};

use super::{require_name, validate_optional_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "City", id })
}

fn validate_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), CoreError> {
    if latitude.is_some_and(|v| !(-90.0..=90.0).contains(&v)) {
        return Err(CoreError::Validation("latitude must be between -90 and 90".into()));
    }
    if longitude.is_some_and(|v| !(-180.0..=180.0).contains(&v)) {
        return Err(CoreError::Validation("longitude must be between -180 and 180".into()));
    }
    Ok(())
}

/// A city is visible only while it and its department are published.
pub(crate) async fn find_published(state: &AppState, id: DbId) -> AppResult<City> {
    if !CityRepo::is_listed(&state.pool, id).await? {
        return Err(not_found(id));
    }
    CityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// GET /api/v1/cities/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<City>> {
    Ok(Json(find_published(&state, id).await?))
}

/// GET /api/v1/cities/{id}/places
pub async fn list_places(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Place>>>> {
    find_published(&state, id).await?;
    let places = PlaceRepo::list_by_city(&state.pool, id, true).await?;
    Ok(Json(DataResponse { data: places }))
}

/// GET /api/v1/cities/{id}/figures
pub async fn list_figures(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FigureResponse>>>> {
    find_published(&state, id).await?;
    let figures = FigureRepo::list_by_city(&state.pool, id, true)
        .await?
        .into_iter()
        .map(FigureResponse::from)
        .collect();
    Ok(Json(DataResponse { data: figures }))
}

/// POST /api/v1/cities
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(mut input): Json<CreateCity>,
) -> AppResult<(StatusCode, Json<City>)> {
    require_name(&input.name)?;
    validate_coordinates(Some(input.latitude), Some(input.longitude))?;
    input.slug = Some(resolve_slug(input.slug.as_deref(), &input.name)?);

    let city = CityRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, city_id = city.id, "City created");
    Ok((StatusCode::CREATED, Json(city)))
}

/// PUT /api/v1/cities/{id}
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCity>,
) -> AppResult<Json<City>> {
    validate_optional_slug(input.slug.as_deref())?;
    if let Some(name) = &input.name {
        require_name(name)?;
    }
    validate_coordinates(input.latitude, input.longitude)?;
    let city = CityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(city))
}

/// DELETE /api/v1/cities/{id}
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if CityRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, city_id = id, "City deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
