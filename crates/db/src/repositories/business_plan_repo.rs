//! Repository for the seeded `business_plans` table.

use sqlx::PgPool;

use crate::models::business_plan::BusinessPlan;

const COLUMNS: &str = "id, slug, name, monthly_price_cents, features, sort_order, created_at";

pub struct BusinessPlanRepo;

impl BusinessPlanRepo {
    /// All plans in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<BusinessPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM business_plans ORDER BY sort_order, id");
        sqlx::query_as::<_, BusinessPlan>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_slug(
        pool: &PgPool,
        slug: &str,
    ) -> Result<Option<BusinessPlan>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM business_plans WHERE slug = $1");
        sqlx::query_as::<_, BusinessPlan>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }
}
