use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqlitePool, SqlitePoolOptions},
    Sqlite,
};

use crate::config::DatabaseConfig;

/// Opens (and if needed creates) the SQLite database and applies the schema.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let db_url = cfg.url.as_str();
    crate::config::ensure_sqlite_parent_dir(db_url)?;
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating SQLite database at {}", db_url);
        Sqlite::create_database(db_url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(cfg.max_connections)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                // Per-connection setting; without it ON DELETE CASCADE is ignored
                sqlx::query("PRAGMA foreign_keys=ON;").execute(&mut *conn).await?;
                if let Err(e) = sqlx::query("PRAGMA busy_timeout=10000;").execute(&mut *conn).await {
                    tracing::warn!("Failed to set busy_timeout: {}", e);
                }
                Ok::<(), sqlx::Error>(())
            })
        })
        .connect(db_url)
        .await?;

    init_db(&pool).await?;
    Ok(pool)
}

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    sqlx::query("PRAGMA foreign_keys=ON;").execute(pool).await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS users (
            id BLOB PRIMARY KEY,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            hashed_password TEXT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS chirps (
            id BLOB PRIMARY KEY,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            body TEXT NOT NULL,
            user_id BLOB NOT NULL,
            FOREIGN KEY(user_id) REFERENCES users(id) ON DELETE CASCADE
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        ("idx_chirps_created", "CREATE INDEX IF NOT EXISTS idx_chirps_created ON chirps(created_at)"),
        ("idx_chirps_user", "CREATE INDEX IF NOT EXISTS idx_chirps_user ON chirps(user_id)"),
    ];
    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            tracing::warn!("Failed to create index {}: {}", name, e);
        }
    }

    Ok(())
}
