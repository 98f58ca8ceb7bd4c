//! Business listing pricing tiers (seeded, read-only).

use ayiti_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BusinessPlan {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub monthly_price_cents: i32,
    pub features: serde_json::Value,
    pub sort_order: i32,
    pub created_at: Timestamp,
}

impl BusinessPlan {
    /// Feature bullet points; non-string entries are skipped.
    pub fn feature_list(&self) -> Vec<&str> {
        self.features
            .as_array()
            .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }

    /// Price formatted as dollars, e.g. `"$29.00"`, or `"Free"`.
    pub fn display_price(&self) -> String {
        if self.monthly_price_cents == 0 {
            "Free".to_string()
        } else {
            format!(
                "${}.{:02}",
                self.monthly_price_cents / 100,
                self.monthly_price_cents % 100
            )
        }
    }
}
