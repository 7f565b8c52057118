//! Inner-join drills over the albums and tracks tables

use anyhow::Result;
use sqlx::SqlitePool;
use tracklore_common::db::query::{run_query, ResultSet};

/// Artist who recorded the song "Alison"
pub async fn alison_artist(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.artist
        FROM albums
        JOIN tracks ON tracks.album = albums.asin
        WHERE tracks.song = 'Alison'
        "#,
    )
    .await?)
}

/// Artist who recorded the song "Exodus"
pub async fn exodus_artist(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.artist
        FROM albums
        JOIN tracks ON tracks.album = albums.asin
        WHERE tracks.song = 'Exodus'
        "#,
    )
    .await?)
}

/// Every song on the album titled "Blur"
pub async fn blur_songs(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT tracks.song
        FROM tracks
        JOIN albums ON albums.asin = tracks.album
        WHERE albums.title = 'Blur'
        "#,
    )
    .await?)
}

/// Title tracks: tracks whose song name equals their album's title
pub async fn title_tracks(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.title
        FROM albums
        JOIN tracks ON tracks.album = albums.asin
        WHERE tracks.song = albums.title
        "#,
    )
    .await?)
}

/// Eponymous albums: title equals the recording artist's name
pub async fn eponymous_albums(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT title
        FROM albums
        WHERE title = artist
        "#,
    )
    .await?)
}
