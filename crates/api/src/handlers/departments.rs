//! Handlers for the `/departments` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ayiti_core::error::CoreError;
use ayiti_core::slug::resolve_slug;
use ayiti_core::types::DbId;
use ayiti_db::models::city::City;
use ayiti_db::models::department::{CreateDepartment, Department, UpdateDepartment};
use ayiti_db::repositories::{CityRepo, DepartmentRepo};

use super::{require_name, validate_optional_slug};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireEditor};
use crate::response::DataResponse;
use crate::state::AppState;

/// Load a published department or fail with 404.
pub(crate) async fn find_published(state: &AppState, id: DbId) -> AppResult<Department> {
    DepartmentRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|d| d.is_published)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))
}

/// GET /api/v1/departments
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Department>>>> {
    let departments = DepartmentRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: departments }))
}

/// GET /api/v1/departments/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Department>> {
    Ok(Json(find_published(&state, id).await?))
}

/// GET /api/v1/departments/{id}/cities
pub async fn list_cities(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<City>>>> {
    find_published(&state, id).await?;
    let cities = CityRepo::list_by_department(&state.pool, id, true).await?;
    Ok(Json(DataResponse { data: cities }))
}

/// POST /api/v1/departments
pub async fn create(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Json(mut input): Json<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    require_name(&input.name)?;
    input.slug = Some(resolve_slug(input.slug.as_deref(), &input.name)?);

    let department = DepartmentRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, department_id = department.id, "Department created");
    Ok((StatusCode::CREATED, Json(department)))
}

/// PUT /api/v1/departments/{id}
pub async fn update(
    RequireEditor(_user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDepartment>,
) -> AppResult<Json<Department>> {
    validate_optional_slug(input.slug.as_deref())?;
    if let Some(name) = &input.name {
        require_name(name)?;
    }
    let department = DepartmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))?;
    Ok(Json(department))
}

/// DELETE /api/v1/departments/{id}
///
/// Cascades to every city, place, figure and photo row below it, so only
/// admins may do it.
pub async fn delete(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DepartmentRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = user.user_id, department_id = id, "Department deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Department",
            id,
        }))
    }
}
