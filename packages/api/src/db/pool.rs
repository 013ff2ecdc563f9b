//! Database connection pool using the lazy OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::OnceCell;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Get or initialize the shared connection pool.
///
/// Reads `DATABASE_URL` on first use; a missing variable surfaces as a
/// configuration error on the calling request rather than a panic at
/// startup.
pub async fn get_pool() -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| sqlx::Error::Configuration("DATABASE_URL not set".into()))?;

        PgPoolOptions::new()
            .max_connections(5)
            .connect(&database_url)
            .await
    })
    .await
}
