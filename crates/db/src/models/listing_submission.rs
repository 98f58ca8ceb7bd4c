//! Property listings submitted through the multi-step form.

use ayiti_core::listing::ListingDraft;
use ayiti_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Every submission starts out in this status.
pub const STATUS_PENDING: &str = "pending";

/// A row from the `listing_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ListingSubmission {
    pub id: DbId,
    pub city_id: DbId,
    pub title: String,
    pub property_type: String,
    pub description: String,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_guests: i32,
    pub amenities: serde_json::Value,
    pub nightly_rate: f64,
    pub minimum_nights: i32,
    pub host_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

/// A fully validated draft, ready to insert.
#[derive(Debug, Clone)]
pub struct CreateListingSubmission {
    pub city_id: DbId,
    pub title: String,
    pub property_type: String,
    pub description: String,
    pub address: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub max_guests: i32,
    pub amenities: Vec<String>,
    pub nightly_rate: f64,
    pub minimum_nights: i32,
    pub host_name: String,
    pub contact_email: String,
    pub contact_phone: Option<String>,
}

impl CreateListingSubmission {
    /// Build from a draft that already passed `validate_draft`.
    ///
    /// Returns `None` if a required field is still missing.
    pub fn from_draft(draft: &ListingDraft) -> Option<Self> {
        Some(Self {
            city_id: draft.city_id?,
            title: draft.title.clone()?.trim().to_string(),
            property_type: draft.property_type.clone()?,
            description: draft.description.clone()?.trim().to_string(),
            address: draft.address.clone()?.trim().to_string(),
            bedrooms: draft.bedrooms?,
            bathrooms: draft.bathrooms?,
            max_guests: draft.max_guests?,
            amenities: draft.amenities.clone(),
            nightly_rate: draft.nightly_rate?,
            minimum_nights: draft.minimum_nights.unwrap_or(1),
            host_name: draft.host_name.clone()?.trim().to_string(),
            contact_email: draft.contact_email.clone()?.trim().to_string(),
            contact_phone: draft
                .contact_phone
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
        })
    }
}
