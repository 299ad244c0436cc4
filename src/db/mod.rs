/// Database access layer
///
/// The store is reached through sqlx's `Any` driver so the same pool works
/// against the default on-disk SQLite file and a `DATABASE_URL`-configured
/// Postgres instance. All row access goes through the repo modules; no raw
/// queries live in handlers.
use std::sync::Once;

use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;

use crate::config::DatabaseConfig;

pub mod note_repo;
pub mod post_repo;

static INSTALL_DRIVERS: Once = Once::new();

/// Build the connection pool for the configured store.
pub async fn connect(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

    AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Create the two tables if they do not exist yet.
///
/// Dedicated migration tooling is deliberately out of scope; the schema is two
/// flat tables and the DDL only differs between backends in how the id column
/// auto-increments.
pub async fn init_schema(pool: &AnyPool, url: &str) -> Result<(), sqlx::Error> {
    let (posts_ddl, notes_ddl) = if url.starts_with("sqlite") {
        (
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                text TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT NOT NULL
            )
            "#,
        )
    } else {
        (
            r#"
            CREATE TABLE IF NOT EXISTS posts (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                text TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS notes (
                id BIGSERIAL PRIMARY KEY,
                content TEXT NOT NULL
            )
            "#,
        )
    };

    sqlx::query(posts_ddl).execute(pool).await?;
    sqlx::query(notes_ddl).execute(pool).await?;

    Ok(())
}
