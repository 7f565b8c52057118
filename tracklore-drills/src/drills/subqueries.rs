//! Subquery drills

use anyhow::Result;
use sqlx::SqlitePool;
use tracklore_common::db::query::{run_query, ResultSet};

/// The five styles with the highest average price per track
///
/// A subquery first counts tracks per priced album; styles then join to
/// that aggregate, so an album without a price contributes to no style.
pub async fn expensive_tastes(pool: &SqlitePool) -> Result<ResultSet> {
    Ok(run_query(
        pool,
        r#"
        SELECT styles.style,
               SUM(counted.price) / SUM(counted.number_of_tracks) AS price_per_track
        FROM styles
        JOIN (
            SELECT albums.asin, albums.price, COUNT(tracks.song) AS number_of_tracks
            FROM albums
            JOIN tracks ON tracks.album = albums.asin
            WHERE albums.price IS NOT NULL
            GROUP BY albums.asin
        ) counted ON counted.asin = styles.album
        GROUP BY styles.style
        ORDER BY price_per_track DESC
        LIMIT 5
        "#,
    )
    .await?)
}
