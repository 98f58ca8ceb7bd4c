//! Property listing wizard: step definitions and validation.
//!
//! Hosts fill in a listing over six sequential steps. The API validates a
//! single step as the host advances and the whole draft on submission.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The six steps of the listing wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStep {
    Basics,
    Location,
    Details,
    Pricing,
    Contact,
    Review,
}

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 6;

impl ListingStep {
    /// Convert a 1-based step number to a `ListingStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Basics),
            2 => Ok(Self::Location),
            3 => Ok(Self::Details),
            4 => Ok(Self::Pricing),
            5 => Ok(Self::Contact),
            6 => Ok(Self::Review),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Basics => 1,
            Self::Location => 2,
            Self::Details => 3,
            Self::Pricing => 4,
            Self::Contact => 5,
            Self::Review => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Location => "Location",
            Self::Details => "Details",
            Self::Pricing => "Pricing",
            Self::Contact => "Contact",
            Self::Review => "Review",
        }
    }

    /// The step after this one, or `None` on the last step.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.to_number() + 1).ok()
    }
}

/// Validate a step transition: exactly one step forward or back.
pub fn validate_step_transition(current: u8, next: u8) -> Result<(), CoreError> {
    ListingStep::from_number(current)?;
    ListingStep::from_number(next)?;

    let diff = (next as i16) - (current as i16);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

/// Accepted property types.
pub const PROPERTY_TYPES: [&str; 5] = ["house", "apartment", "villa", "guesthouse", "room"];

pub const MAX_TITLE_LEN: usize = 120;
pub const MIN_DESCRIPTION_LEN: usize = 30;
pub const MAX_GUESTS: i32 = 30;

/// A listing as collected by the wizard. Every field is optional until
/// the step that owns it is validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingDraft {
    // Basics
    pub title: Option<String>,
    pub property_type: Option<String>,
    pub description: Option<String>,
    // Location
    pub city_id: Option<DbId>,
    pub address: Option<String>,
    // Details
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub max_guests: Option<i32>,
    #[serde(default)]
    pub amenities: Vec<String>,
    // Pricing
    pub nightly_rate: Option<f64>,
    pub minimum_nights: Option<i32>,
    // Contact
    pub host_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    // Review
    #[serde(default)]
    pub accept_terms: bool,
}

/// Validate the fields owned by `step`.
pub fn validate_step(step: ListingStep, draft: &ListingDraft) -> Result<(), CoreError> {
    match step {
        ListingStep::Basics => {
            let title = required(&draft.title, "title")?;
            if title.chars().count() > MAX_TITLE_LEN {
                return Err(CoreError::Validation(format!(
                    "title must be at most {MAX_TITLE_LEN} characters"
                )));
            }
            let property_type = required(&draft.property_type, "property_type")?;
            if !PROPERTY_TYPES.contains(&property_type) {
                return Err(CoreError::Validation(format!(
                    "Invalid property_type '{property_type}'. Must be one of: {}",
                    PROPERTY_TYPES.join(", ")
                )));
            }
            let description = required(&draft.description, "description")?;
            if description.chars().count() < MIN_DESCRIPTION_LEN {
                return Err(CoreError::Validation(format!(
                    "description must be at least {MIN_DESCRIPTION_LEN} characters"
                )));
            }
        }
        ListingStep::Location => {
            if draft.city_id.is_none() {
                return Err(CoreError::Validation("city_id is required".into()));
            }
            required(&draft.address, "address")?;
        }
        ListingStep::Details => {
            let bedrooms = draft.bedrooms.unwrap_or(-1);
            if bedrooms < 0 {
                return Err(CoreError::Validation("bedrooms must be zero or more".into()));
            }
            if draft.bathrooms.unwrap_or(-1) < 0 {
                return Err(CoreError::Validation("bathrooms must be zero or more".into()));
            }
            match draft.max_guests {
                Some(n) if (1..=MAX_GUESTS).contains(&n) => {}
                _ => {
                    return Err(CoreError::Validation(format!(
                        "max_guests must be between 1 and {MAX_GUESTS}"
                    )))
                }
            }
        }
        ListingStep::Pricing => {
            match draft.nightly_rate {
                Some(rate) if rate.is_finite() && rate > 0.0 => {}
                _ => {
                    return Err(CoreError::Validation(
                        "nightly_rate must be a positive amount".into(),
                    ))
                }
            }
            if draft.minimum_nights.is_some_and(|n| n < 1) {
                return Err(CoreError::Validation(
                    "minimum_nights must be at least 1".into(),
                ));
            }
        }
        ListingStep::Contact => {
            required(&draft.host_name, "host_name")?;
            let email = required(&draft.contact_email, "contact_email")?;
            if !looks_like_email(email) {
                return Err(CoreError::Validation(format!(
                    "Invalid contact_email '{email}'"
                )));
            }
        }
        ListingStep::Review => {
            if !draft.accept_terms {
                return Err(CoreError::Validation(
                    "The listing terms must be accepted before submitting".into(),
                ));
            }
        }
    }
    Ok(())
}

/// Validate `step` and return the step that follows it.
///
/// On the final step this returns `None`: the draft is ready to submit.
pub fn advance(step: u8, draft: &ListingDraft) -> Result<Option<ListingStep>, CoreError> {
    let step = ListingStep::from_number(step)?;
    validate_step(step, draft)?;
    Ok(step.next())
}

/// Validate every step in order, reporting the first failing step.
pub fn validate_draft(draft: &ListingDraft) -> Result<(), CoreError> {
    for n in MIN_STEP..=MAX_STEP {
        let step = ListingStep::from_number(n)?;
        validate_step(step, draft).map_err(|e| match e {
            CoreError::Validation(msg) => {
                CoreError::Validation(format!("Step {n} ({}): {msg}", step.label()))
            }
            other => other,
        })?;
    }
    Ok(())
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, CoreError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
