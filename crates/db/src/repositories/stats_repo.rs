//! Row counts per content table.

use sqlx::PgPool;

use crate::models::stats::TableCount;

/// Tables reported by the dev counts endpoint, in display order.
pub const COUNTED_TABLES: [&str; 8] = [
    "departments",
    "cities",
    "places",
    "figures",
    "media",
    "business_plans",
    "users",
    "listing_submissions",
];

pub struct StatsRepo;

impl StatsRepo {
    /// `SELECT COUNT(*)` for every table in [`COUNTED_TABLES`].
    pub async fn table_counts(pool: &PgPool) -> Result<Vec<TableCount>, sqlx::Error> {
        let mut counts = Vec::with_capacity(COUNTED_TABLES.len());
        for table in COUNTED_TABLES {
            let (rows,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(pool)
                .await?;
            counts.push(TableCount { table, rows });
        }
        Ok(counts)
    }
}
