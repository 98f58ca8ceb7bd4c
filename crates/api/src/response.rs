//! Shared response envelope types for API handlers.
//!
//! Collection and computed responses use a `{ "data": ... }` envelope.
//! Single entities are returned bare.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// ```ignore
/// Ok(Json(DataResponse { data: photos }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
