//! Repository for the `listing_submissions` table.

use ayiti_core::types::DbId;
use sqlx::PgPool;

use crate::models::listing_submission::{
    CreateListingSubmission, ListingSubmission, STATUS_PENDING,
};

const COLUMNS: &str = "id, city_id, title, property_type, description, address, bedrooms, \
                       bathrooms, max_guests, amenities, nightly_rate, minimum_nights, host_name, \
                       contact_email, contact_phone, status, created_at";

pub struct ListingSubmissionRepo;

impl ListingSubmissionRepo {
    /// Store a validated listing as `pending`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateListingSubmission,
    ) -> Result<ListingSubmission, sqlx::Error> {
        let query = format!(
            "INSERT INTO listing_submissions
                (city_id, title, property_type, description, address, bedrooms, bathrooms,
                 max_guests, amenities, nightly_rate, minimum_nights, host_name, contact_email,
                 contact_phone, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ListingSubmission>(&query)
            .bind(input.city_id)
            .bind(&input.title)
            .bind(&input.property_type)
            .bind(&input.description)
            .bind(&input.address)
            .bind(input.bedrooms)
            .bind(input.bathrooms)
            .bind(input.max_guests)
            .bind(serde_json::json!(input.amenities))
            .bind(input.nightly_rate)
            .bind(input.minimum_nights)
            .bind(&input.host_name)
            .bind(&input.contact_email)
            .bind(&input.contact_phone)
            .bind(STATUS_PENDING)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ListingSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM listing_submissions WHERE id = $1");
        sqlx::query_as::<_, ListingSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List submissions with the given status, newest first.
    pub async fn list_by_status(
        pool: &PgPool,
        status: &str,
    ) -> Result<Vec<ListingSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM listing_submissions WHERE status = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, ListingSubmission>(&query)
            .bind(status)
            .fetch_all(pool)
            .await
    }
}
