use crate::error::DbResult;
use sqlx::{Any, Pool, any::AnyPoolOptions};

/// Create a database pool from a connection string
pub async fn create_pool(database_url: &str, max_connections: u32) -> DbResult<Pool<Any>> {
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Run migrations on the database
pub async fn run_migrations(pool: &Pool<Any>) -> DbResult<()> {
    // Enable foreign keys for SQLite (no-op for other databases)
    let _ = sqlx::query("PRAGMA foreign_keys = ON")
        .execute(pool)
        .await;

    sqlx::query(include_str!("../migrations/001_initial.sql"))
        .execute(pool)
        .await?;

    Ok(())
}
