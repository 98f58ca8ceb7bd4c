//! Row counts for the dev-only counts endpoint.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TableCount {
    pub table: &'static str,
    pub rows: i64,
}
