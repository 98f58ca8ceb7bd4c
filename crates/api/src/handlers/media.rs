//! Handlers for place photos: list, multipart upload, delete.

use std::io::ErrorKind;
use std::path::{Path as FsPath, PathBuf};

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use ayiti_core::error::CoreError;
use ayiti_core::types::DbId;
use ayiti_core::upload::{
    image_extension, place_dir, public_path, stored_filename, validate_size, UPLOADS_URL_PREFIX,
};
use ayiti_db::models::media::{CreateMedia, Media};
use ayiti_db::repositories::{MediaRepo, PlaceRepo};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireEditor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fresh names tried before giving up on a crowded directory.
const STORE_ATTEMPTS: usize = 3;

/// GET /api/v1/places/{id}/photos
pub async fn list_for_place(
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Media>>>> {
    super::places::find_published(&state, place_id).await?;
    let photos = MediaRepo::list_by_place(&state.pool, place_id).await?;
    Ok(Json(DataResponse { data: photos }))
}

/// POST /api/v1/places/{id}/photos
///
/// Accepts a multipart form with a required `file` field and an optional
/// `alt` field. The file is written under `{UPLOAD_DIR}/places/{id}/` and
/// served from `/uploads/places/{id}/...`.
pub async fn upload(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(place_id): Path<DbId>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Media>)> {
    let mut file_data: Option<(String, Vec<u8>)> = None;
    let mut alt: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file_data = Some((filename, data.to_vec()));
            }
            "alt" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                alt = Some(text.trim().to_string());
            }
            _ => {} // ignore unknown fields
        }
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    let ext = image_extension(&filename)?;
    validate_size(data.len(), state.config.max_upload_bytes)?;

    let place = PlaceRepo::find_by_id(&state.pool, place_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Place",
            id: place_id,
        }))?;

    let storage_dir = state.config.upload_dir.join(place_dir(place_id));
    tokio::fs::create_dir_all(&storage_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let (stored, file) = store_new_file(&storage_dir, place_id, &filename, &ext, &data).await?;

    let input = CreateMedia {
        place_id,
        path: public_path(place_id, &stored),
        alt: alt.filter(|a| !a.is_empty()).unwrap_or_else(|| place.name.clone()),
    };
    let media = match MediaRepo::create(&state.pool, &input).await {
        Ok(media) => media,
        Err(e) => {
            remove_stored_file(&file).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        user_id = user.user_id,
        place_id,
        media_id = media.id,
        bytes = data.len(),
        "Photo uploaded"
    );
    Ok((StatusCode::CREATED, Json(media)))
}

/// Write `data` under a new name in `dir`. Existing files are never replaced.
async fn store_new_file(
    dir: &FsPath,
    place_id: DbId,
    original: &str,
    ext: &str,
    data: &[u8],
) -> AppResult<(String, PathBuf)> {
    for _ in 0..STORE_ATTEMPTS {
        let nonce = Uuid::new_v4().simple().to_string();
        let stored = stored_filename(
            place_id,
            original,
            ext,
            chrono::Utc::now().timestamp(),
            &nonce[..8],
        );
        let target = dir.join(&stored);
        let mut file = match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
            Err(e) => {
                return Err(AppError::InternalError(format!("Failed to store upload: {e}")));
            }
        };
        let written = match file.write_all(data).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            remove_stored_file(&target).await;
            return Err(AppError::InternalError(format!("Failed to store upload: {e}")));
        }
        return Ok((stored, target));
    }
    Err(AppError::InternalError(
        "Failed to store upload: no free file name".into(),
    ))
}

async fn remove_stored_file(file: &FsPath) {
    if let Err(e) = tokio::fs::remove_file(file).await {
        tracing::warn!(path = %file.display(), error = %e, "Failed to remove photo file");
    }
}

/// DELETE /api/v1/photos/{id}
///
/// Removes the row, then the file. A missing file only logs a warning.
pub async fn delete(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let media = MediaRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Photo", id }))?;

    if let Some(relative) = media.path.strip_prefix(UPLOADS_URL_PREFIX) {
        let file = state.config.upload_dir.join(relative.trim_start_matches('/'));
        if let Err(e) = tokio::fs::remove_file(&file).await {
            tracing::warn!(
                media_id = id,
                path = %file.display(),
                error = %e,
                "Failed to remove photo file"
            );
        }
    }
    tracing::info!(user_id = user.user_id, media_id = id, "Photo deleted");
    Ok(StatusCode::NO_CONTENT)
}
