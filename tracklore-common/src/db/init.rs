//! Catalog initialization
//!
//! Opens the SQLite catalog, creating the file and the three catalog tables
//! on first run. Versioned schema evolution is out of scope; the tables are
//! created once and never altered.

use crate::Result;
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open the catalog database, creating file and schema if needed
pub async fn open_catalog(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use proper SQLite URI with mode=rwc (read, write, create)
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePool::connect(&db_url).await?;

    if newly_created {
        info!("Initialized new catalog: {}", db_path.display());
    } else {
        info!("Opened existing catalog: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all catalog tables (idempotent)
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_albums_table(pool).await?;
    create_styles_table(pool).await?;
    create_tracks_table(pool).await?;
    Ok(())
}

pub async fn create_albums_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS albums (
            asin TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            price REAL,
            rdate TEXT,
            label TEXT,
            rank INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn create_styles_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS styles (
            album TEXT NOT NULL REFERENCES albums(asin),
            style TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn create_tracks_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tracks (
            album TEXT NOT NULL REFERENCES albums(asin),
            disk INTEGER NOT NULL,
            posn INTEGER NOT NULL,
            song TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
