//! Persistence layer: connection pool, migrations, models and repositories.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod fallback;
pub mod models;
pub mod repositories;

pub use fallback::safe_db_operation;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Create a pool, retrying the initial connection up to `attempts` times.
///
/// Used at startup so the server can come up while the database container
/// is still booting.
pub async fn connect_with_retry(
    database_url: &str,
    attempts: u32,
    delay: Duration,
) -> Result<DbPool, sqlx::Error> {
    retry(attempts, delay, || create_pool(database_url)).await
}

async fn retry<T, F, Fut>(attempts: u32, delay: Duration, mut op: F) -> Result<T, sqlx::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt < attempts => {
                tracing::warn!(attempt, attempts, error = %e, "Database connection failed, retrying");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    #[tokio::test]
    async fn retry_stops_at_first_success() {
        let calls = AtomicU32::new(0);
        let result = retry(5, Duration::ZERO, || {
            let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
            async move {
                if n < 3 {
                    Err(sqlx::Error::PoolTimedOut)
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_gives_up_after_all_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), _> = retry(2, Duration::ZERO, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(sqlx::Error::PoolTimedOut) }
        })
        .await;
        assert!(matches!(result, Err(sqlx::Error::PoolTimedOut)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
