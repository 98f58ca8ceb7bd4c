//! Graceful degradation for read paths.
//!
//! Page handlers that can still render something useful without the
//! database wrap their queries in [`safe_db_operation`] instead of failing
//! the whole request.

use std::future::Future;

/// Await a database operation, returning `fallback` if it fails.
///
/// The error is logged at `warn` with the operation label and otherwise
/// swallowed.
pub async fn safe_db_operation<T, E, Fut>(label: &str, operation: Fut, fallback: T) -> T
where
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(operation = label, error = %e, "Database operation failed, using fallback");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn success_passes_value_through() {
        let value = safe_db_operation("ok", async { Ok::<_, sqlx::Error>(vec![1, 2]) }, vec![]).await;
        assert_eq!(value, vec![1, 2]);
    }

    #[tokio::test]
    async fn failure_returns_fallback() {
        let value = safe_db_operation(
            "broken",
            async { Err::<Vec<i32>, _>(sqlx::Error::PoolClosed) },
            Vec::new(),
        )
        .await;
        assert!(value.is_empty());
    }
}
