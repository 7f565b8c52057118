//! GROUP BY / HAVING drills

use anyhow::Result;
use sqlx::SqlitePool;
use tracklore_common::db::query::{run_query, ResultSet};

/// Per album, how many of its tracks mention "Heart"
///
/// Albums with no such tracks are omitted. Ordered by the count, ties
/// broken by title.
pub async fn heart_tracks(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.title, COUNT(tracks.song) AS number_of_tracks
        FROM albums
        JOIN tracks ON tracks.album = albums.asin
        WHERE tracks.song LIKE '%Heart%'
        GROUP BY albums.title
        ORDER BY number_of_tracks DESC, albums.title
        "#,
    )
    .await?)
}

/// Songs that appear on more than two distinct album titles
pub async fn song_title_counts(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT tracks.song, COUNT(DISTINCT albums.title) AS times
        FROM tracks
        JOIN albums ON tracks.album = albums.asin
        GROUP BY tracks.song
        HAVING COUNT(DISTINCT albums.title) > 2
        "#,
    )
    .await?)
}

/// Good value albums: price per track under 0.50
///
/// Albums without a price never qualify; the HAVING comparison is null.
pub async fn best_value(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.title, albums.price, COUNT(tracks.song) AS number_of_tracks
        FROM albums
        JOIN tracks ON tracks.album = albums.asin
        GROUP BY albums.title, albums.price
        HAVING albums.price / COUNT(tracks.song) < 0.5
        "#,
    )
    .await?)
}

/// Top 10 albums by track count, ordered by count then title (descending)
pub async fn top_track_counts(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.title, COUNT(tracks.song) AS track_count
        FROM albums
        JOIN tracks ON tracks.album = albums.asin
        GROUP BY albums.title
        ORDER BY track_count DESC, albums.title DESC
        LIMIT 10
        "#,
    )
    .await?)
}

/// The artist with the most rock albums, and how many
pub async fn rock_superstars(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT albums.artist, COUNT(DISTINCT styles.album) AS number_of_albums
        FROM albums
        JOIN styles ON styles.album = albums.asin
        WHERE styles.style LIKE '%Rock%'
        GROUP BY albums.artist
        ORDER BY number_of_albums DESC
        LIMIT 1
        "#,
    )
    .await?)
}
