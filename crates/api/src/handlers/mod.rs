pub mod auth;
pub mod business_plans;
pub mod cities;
pub mod departments;
pub mod dev;
pub mod figures;
pub mod listings;
pub mod media;
pub mod places;

use ayiti_core::error::CoreError;
use ayiti_core::slug::validate_slug;

/// Reject blank names.
pub(crate) fn require_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    Ok(())
}

/// Validate a slug when an update supplies one.
pub(crate) fn validate_optional_slug(slug: Option<&str>) -> Result<(), CoreError> {
    match slug {
        Some(s) => validate_slug(s),
        None => Ok(()),
    }
}
