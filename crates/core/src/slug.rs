//! URL slug helpers.
//!
//! Slugs are lowercase ASCII words joined by single hyphens. Accented
//! Latin letters common in Haitian Creole and French names are folded to
//! their base letter (`Cap-Haïtien` becomes `cap-haitien`).

use crate::error::CoreError;

/// Maximum slug length accepted by the schema.
pub const MAX_SLUG_LEN: usize = 120;

/// Derive a slug from a display name.
pub fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for c in name.chars().map(fold_accent) {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    out.truncate(MAX_SLUG_LEN);
    out.trim_end_matches('-').to_string()
}

/// Validate a client-supplied slug.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if slug.len() > MAX_SLUG_LEN {
        return Err(CoreError::Validation(format!(
            "Slug must be at most {MAX_SLUG_LEN} characters"
        )));
    }
    let well_formed = slug.split('-').all(|part| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    });
    if !well_formed {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Use lowercase letters, digits and single hyphens"
        )));
    }
    Ok(())
}

/// Use `slug` when given, otherwise derive one from `name`. The result is validated.
pub fn resolve_slug(slug: Option<&str>, name: &str) -> Result<String, CoreError> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slugify(name),
    };
    validate_slug(&slug)?;
    Ok(slug)
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'À' | 'Á' | 'Â' | 'Ä' | 'Ã' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ò' | 'ó' | 'ô' | 'ö' | 'õ' | 'Ò' | 'Ó' | 'Ô' | 'Ö' | 'Õ' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ç' | 'Ç' => 'c',
        'ñ' | 'Ñ' => 'n',
        other => other,
    }
}
