//! Handlers for the multi-step property listing form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ayiti_core::error::CoreError;
use ayiti_core::listing::{
    advance, validate_draft, validate_step_transition, ListingDraft, ListingStep,
};
use ayiti_db::models::listing_submission::{CreateListingSubmission, ListingSubmission};
use ayiti_db::repositories::{CityRepo, ListingSubmissionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /listings/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateStepRequest {
    /// The step being left (1-based).
    pub step: u8,
    /// Where the form wants to go; defaults to the following step.
    pub target: Option<u8>,
    #[serde(default)]
    pub draft: ListingDraft,
}

#[derive(Debug, Serialize)]
pub struct StepOutcome {
    /// Step to show next, or `None` when the draft is ready to submit.
    pub next_step: Option<u8>,
    pub next_label: Option<&'static str>,
}

impl From<Option<ListingStep>> for StepOutcome {
    fn from(step: Option<ListingStep>) -> Self {
        Self {
            next_step: step.map(ListingStep::to_number),
            next_label: step.map(ListingStep::label),
        }
    }
}

/// POST /api/v1/listings/validate
///
/// Moving forward validates the current step's fields; moving back does not.
pub async fn validate_step(
    Json(input): Json<ValidateStepRequest>,
) -> AppResult<Json<DataResponse<StepOutcome>>> {
    if let Some(target) = input.target {
        validate_step_transition(input.step, target)?;
        if target < input.step {
            let back = ListingStep::from_number(target)?;
            return Ok(Json(DataResponse { data: Some(back).into() }));
        }
    }
    let next = advance(input.step, &input.draft)?;
    Ok(Json(DataResponse { data: next.into() }))
}

/// POST /api/v1/listings
///
/// Validates every step and stores the listing as `pending` for review.
pub async fn submit(
    State(state): State<AppState>,
    Json(draft): Json<ListingDraft>,
) -> AppResult<(StatusCode, Json<ListingSubmission>)> {
    validate_draft(&draft)?;
    let input = CreateListingSubmission::from_draft(&draft)
        .ok_or_else(|| AppError::BadRequest("Listing is incomplete".into()))?;

    CityRepo::find_by_id(&state.pool, input.city_id)
        .await?
        .filter(|c| c.is_published)
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "Unknown city_id {}",
                input.city_id
            )))
        })?;

    let submission = ListingSubmissionRepo::create(&state.pool, &input).await?;
    tracing::info!(
        submission_id = submission.id,
        city_id = submission.city_id,
        "Listing submitted for review"
    );
    Ok((StatusCode::CREATED, Json(submission)))
}
