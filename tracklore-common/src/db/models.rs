//! Catalog row models
//!
//! Structs mirroring the three catalog tables, with the insert helpers used
//! by the seed path. Drill queries read these tables through the generic
//! executor instead.

use crate::Result;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

/// Album record
#[derive(Debug, Clone)]
pub struct Album {
    pub asin: String,
    pub title: String,
    pub artist: String,
    pub price: Option<f64>,
    pub rdate: Option<NaiveDate>,
    pub label: Option<String>,
    pub rank: Option<i64>,
}

/// Style record (many per album)
#[derive(Debug, Clone)]
pub struct Style {
    pub album: String,
    pub style: String,
}

/// Track record (many per album, ordered by disk and position)
#[derive(Debug, Clone)]
pub struct Track {
    pub album: String,
    pub disk: i64,
    pub posn: i64,
    pub song: String,
}

/// Save album to the catalog
pub async fn save_album(pool: &SqlitePool, album: &Album) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO albums (asin, title, artist, price, rdate, label, rank)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(asin) DO NOTHING
        "#,
    )
    .bind(&album.asin)
    .bind(&album.title)
    .bind(&album.artist)
    .bind(album.price)
    .bind(album.rdate)
    .bind(&album.label)
    .bind(album.rank)
    .execute(pool)
    .await?;

    Ok(())
}

/// Load album by ASIN
pub async fn load_album(pool: &SqlitePool, asin: &str) -> Result<Option<Album>> {
    let row = sqlx::query(
        r#"
        SELECT asin, title, artist, price, rdate, label, rank
        FROM albums
        WHERE asin = ?
        "#,
    )
    .bind(asin)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Album {
        asin: row.get("asin"),
        title: row.get("title"),
        artist: row.get("artist"),
        price: row.get("price"),
        rdate: row.get("rdate"),
        label: row.get("label"),
        rank: row.get("rank"),
    }))
}

/// Save style to the catalog
pub async fn save_style(pool: &SqlitePool, style: &Style) -> Result<()> {
    sqlx::query("INSERT INTO styles (album, style) VALUES (?, ?)")
        .bind(&style.album)
        .bind(&style.style)
        .execute(pool)
        .await?;

    Ok(())
}

/// Save track to the catalog
pub async fn save_track(pool: &SqlitePool, track: &Track) -> Result<()> {
    sqlx::query("INSERT INTO tracks (album, disk, posn, song) VALUES (?, ?, ?, ?)")
        .bind(&track.album)
        .bind(track.disk)
        .bind(track.posn)
        .bind(&track.song)
        .execute(pool)
        .await?;

    Ok(())
}
