//! Handlers for the `/figures` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ayiti_core::error::CoreError;
use ayiti_core::slug::resolve_slug;
use ayiti_core::types::DbId;
use ayiti_db::models::figure::{CreateFigure, FigureResponse, UpdateFigure};
use ayiti_db::repositories::{CityRepo, FigureRepo};

use super::{require_name, validate_optional_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Figure", id })
}

fn validate_years(birth_year: Option<i32>, death_year: Option<i32>) -> Result<(), CoreError> {
    if let (Some(birth), Some(death)) = (birth_year, death_year) {
        if death < birth {
            return Err(CoreError::Validation(
                "death_year must not be before birth_year".into(),
            ));
        }
    }
    Ok(())
}

/// GET /api/v1/figures/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FigureResponse>> {
    let figure = FigureRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|f| f.is_published)
        .ok_or_else(|| not_found(id))?;
    if !CityRepo::is_listed(&state.pool, figure.city_id).await? {
        return Err(not_found(id));
    }
    Ok(Json(figure.into()))
}

/// POST /api/v1/figures
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(mut input): Json<CreateFigure>,
) -> AppResult<(StatusCode, Json<FigureResponse>)> {
    require_name(&input.name)?;
    validate_years(input.birth_year, input.death_year)?;
    input.slug = Some(resolve_slug(input.slug.as_deref(), &input.name)?);

    let figure = FigureRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, figure_id = figure.id, "Figure created");
    Ok((StatusCode::CREATED, Json(figure.into())))
}

/// PUT /api/v1/figures/{id}
///
/// Year ordering is checked against the stored row when only one year changes.
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFigure>,
) -> AppResult<Json<FigureResponse>> {
    validate_optional_slug(input.slug.as_deref())?;
    if let Some(name) = &input.name {
        require_name(name)?;
    }
    let existing = FigureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_years(
        input.birth_year.or(existing.birth_year),
        input.death_year.or(existing.death_year),
    )?;

    let figure = FigureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(figure.into()))
}

/// DELETE /api/v1/figures/{id}
pub async fn delete(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FigureRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
