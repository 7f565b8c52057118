//! Demo catalog seed data
//!
//! A small curated record catalog: 12 albums with styles and tracks. The
//! runner inserts it on first start so every drill has output to show; the
//! drill integration tests run against the same data.

use crate::db::models::{save_album, save_style, save_track, Album, Style, Track};
use crate::Result;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::info;

const MY_AIM_IS_TRUE: &str = "B000002UB3";
const EXODUS: &str = "B000001FR2";
const BLUR: &str = "B000002TQV";
const HEART: &str = "B000002UJQ";
const BAD_ANIMALS: &str = "B000002WLR";
const LEGEND: &str = "B00000AFX2";
const REGGAE_FOREVER: &str = "B000003CXD";
const RING_CYCLE: &str = "B00000E5K9";
const TRUE_BLUE: &str = "B000002GLT";
const SLIPPERY_WHEN_WET: &str = "B000002L7H";
const HYMNS_OF_PRAISE: &str = "B000008MN1";
const PIANO_FAVOURITES: &str = "B000005J9D";

/// True when the albums table has no rows
pub async fn catalog_is_empty(pool: &SqlitePool) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM albums")
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

/// Populate the catalog with the demo data
pub async fn seed_demo_catalog(pool: &SqlitePool) -> Result<()> {
    let albums = demo_albums();
    for album in &albums {
        save_album(pool, album).await?;
    }
    for style in demo_styles() {
        save_style(pool, &style).await?;
    }
    for track in demo_tracks() {
        save_track(pool, &track).await?;
    }

    info!("Seeded demo catalog: {} albums", albums.len());
    Ok(())
}

fn album(
    asin: &str,
    title: &str,
    artist: &str,
    price: Option<f64>,
    rdate: Option<NaiveDate>,
    label: &str,
    rank: i64,
) -> Album {
    Album {
        asin: asin.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        price,
        rdate,
        label: Some(label.to_string()),
        rank: Some(rank),
    }
}

fn demo_albums() -> Vec<Album> {
    vec![
        album(
            MY_AIM_IS_TRUE,
            "My Aim Is True",
            "Elvis Costello",
            Some(9.98),
            NaiveDate::from_ymd_opt(1977, 7, 22),
            "Stiff",
            7,
        ),
        album(
            EXODUS,
            "Exodus",
            "Bob Marley & The Wailers",
            Some(11.98),
            NaiveDate::from_ymd_opt(1977, 6, 3),
            "Island",
            3,
        ),
        album(
            BLUR,
            "Blur",
            "Blur",
            Some(12.99),
            NaiveDate::from_ymd_opt(1997, 2, 10),
            "Food",
            12,
        ),
        album(
            HEART,
            "Heart",
            "Heart",
            Some(7.49),
            NaiveDate::from_ymd_opt(1985, 6, 21),
            "Capitol",
            20,
        ),
        album(
            BAD_ANIMALS,
            "Bad Animals",
            "Heart",
            Some(8.99),
            NaiveDate::from_ymd_opt(1987, 6, 6),
            "Capitol",
            34,
        ),
        album(
            LEGEND,
            "Legend",
            "Bob Marley & The Wailers",
            Some(10.99),
            NaiveDate::from_ymd_opt(1984, 5, 8),
            "Island",
            5,
        ),
        // Budget compilation listed without a price
        album(
            REGGAE_FOREVER,
            "Reggae Forever",
            "Various Artists",
            None,
            NaiveDate::from_ymd_opt(1999, 3, 16),
            "K-Tel",
            88,
        ),
        album(
            RING_CYCLE,
            "Der Ring des Nibelungen",
            "Georg Solti",
            Some(129.99),
            NaiveDate::from_ymd_opt(1997, 5, 20),
            "Decca",
            41,
        ),
        album(
            TRUE_BLUE,
            "True Blue",
            "Madonna",
            Some(6.99),
            NaiveDate::from_ymd_opt(1986, 6, 30),
            "Sire",
            15,
        ),
        album(
            SLIPPERY_WHEN_WET,
            "Slippery When Wet",
            "Bon Jovi",
            Some(5.49),
            NaiveDate::from_ymd_opt(1986, 8, 18),
            "Mercury",
            9,
        ),
        album(
            HYMNS_OF_PRAISE,
            "Hymns of Praise",
            "Choir of King's College",
            Some(1.99),
            NaiveDate::from_ymd_opt(1994, 10, 4),
            "EMI",
            77,
        ),
        album(
            PIANO_FAVOURITES,
            "Piano Favourites",
            "Various Artists",
            Some(2.99),
            NaiveDate::from_ymd_opt(1995, 2, 14),
            "Naxos",
            95,
        ),
    ]
}

fn demo_styles() -> Vec<Style> {
    [
        (MY_AIM_IS_TRUE, "Rock"),
        (MY_AIM_IS_TRUE, "New Wave"),
        (EXODUS, "Reggae"),
        (BLUR, "Britpop"),
        (HEART, "Rock"),
        (HEART, "Pop"),
        (BAD_ANIMALS, "Rock"),
        (LEGEND, "Reggae"),
        (REGGAE_FOREVER, "Reggae"),
        (REGGAE_FOREVER, "Compilation"),
        (RING_CYCLE, "Opera"),
        (RING_CYCLE, "Classical"),
        (TRUE_BLUE, "Pop"),
        (TRUE_BLUE, "Dance"),
        (SLIPPERY_WHEN_WET, "Hard Rock"),
        (HYMNS_OF_PRAISE, "Choral"),
        (HYMNS_OF_PRAISE, "Classical"),
        (PIANO_FAVOURITES, "Classical"),
        (PIANO_FAVOURITES, "Easy Listening"),
    ]
    .into_iter()
    .map(|(album, style)| Style {
        album: album.to_string(),
        style: style.to_string(),
    })
    .collect()
}

/// Append one disk worth of tracks, positions numbered from 1
fn push_disk(tracks: &mut Vec<Track>, album: &str, disk: i64, songs: &[&str]) {
    for (index, song) in songs.iter().enumerate() {
        tracks.push(Track {
            album: album.to_string(),
            disk,
            posn: index as i64 + 1,
            song: song.to_string(),
        });
    }
}

fn demo_tracks() -> Vec<Track> {
    let mut tracks = Vec::new();

    push_disk(
        &mut tracks,
        MY_AIM_IS_TRUE,
        1,
        &[
            "Welcome to the Working Week",
            "Miracle Man",
            "Alison",
            "Sneaky Feelings",
            "(The Angels Wanna Wear My) Red Shoes",
            "Watching the Detectives",
        ],
    );

    push_disk(
        &mut tracks,
        EXODUS,
        1,
        &[
            "Natural Mystic",
            "Guiltiness",
            "The Heathen",
            "Exodus",
            "Jamming",
            "Three Little Birds",
            "One Love / People Get Ready",
        ],
    );

    push_disk(
        &mut tracks,
        BLUR,
        1,
        &[
            "Beetlebum",
            "Song 2",
            "Country Sad Ballad Man",
            "M.O.R.",
            "On Your Own",
            "You're So Great",
            "Death of a Party",
            "Essex Dogs",
        ],
    );

    push_disk(
        &mut tracks,
        HEART,
        1,
        &[
            "If Looks Could Kill",
            "What About Love",
            "Never",
            "These Dreams",
            "Nothin' at All",
            "Shell Shock",
        ],
    );

    push_disk(
        &mut tracks,
        BAD_ANIMALS,
        1,
        &[
            "Who Will You Run To",
            "Alone",
            "There's the Girl",
            "Wait for an Answer",
            "Strangers of the Heart",
        ],
    );

    push_disk(
        &mut tracks,
        LEGEND,
        1,
        &[
            "Is This Love",
            "No Woman, No Cry",
            "Could You Be Loved",
            "Three Little Birds",
            "Buffalo Soldier",
            "One Love / People Get Ready",
        ],
    );

    push_disk(
        &mut tracks,
        REGGAE_FOREVER,
        1,
        &[
            "One Love / People Get Ready",
            "Three Little Birds",
            "Israelites",
            "Pressure Drop",
            "Rivers of Babylon",
        ],
    );

    // One disk per opera, eight scenes each
    let operas = [
        "Das Rheingold",
        "Die Walk\u{fc}re",
        "Siegfried",
        "G\u{f6}tterd\u{e4}mmerung",
    ];
    for (disk, opera) in operas.iter().enumerate() {
        let scenes: Vec<String> = (1..=8).map(|scene| format!("{}, Scene {}", opera, scene)).collect();
        let songs: Vec<&str> = scenes.iter().map(String::as_str).collect();
        push_disk(&mut tracks, RING_CYCLE, disk as i64 + 1, &songs);
    }

    push_disk(
        &mut tracks,
        TRUE_BLUE,
        1,
        &[
            "Papa Don't Preach",
            "Open Your Heart",
            "White Heat",
            "Live to Tell",
            "La Isla Bonita",
            "True Blue",
        ],
    );

    push_disk(
        &mut tracks,
        SLIPPERY_WHEN_WET,
        1,
        &[
            "Let It Rock",
            "You Give Love a Bad Name",
            "Livin' on a Prayer",
            "Wanted Dead or Alive",
            "Raise Your Hands",
            "Never Say Goodbye",
        ],
    );

    push_disk(
        &mut tracks,
        HYMNS_OF_PRAISE,
        1,
        &[
            "Amazing Grace",
            "Abide with Me",
            "Jerusalem",
            "Be Thou My Vision",
            "Sweet Heart of Jesus",
        ],
    );

    push_disk(
        &mut tracks,
        PIANO_FAVOURITES,
        1,
        &[
            "F\u{fc}r Elise",
            "Clair de Lune",
            "Moonlight Sonata",
            "Gymnop\u{e9}die No. 1",
            "Heart and Soul",
            "Dear Heart",
            "Amazing Grace",
        ],
    );

    tracks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_demo_catalog() {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await.unwrap();
        crate::db::init::create_schema(&pool).await.unwrap();

        assert!(catalog_is_empty(&pool).await.unwrap());

        seed_demo_catalog(&pool).await.unwrap();

        assert!(!catalog_is_empty(&pool).await.unwrap());

        let albums: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM albums")
            .fetch_one(&pool)
            .await
            .unwrap();
        let styles: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM styles")
            .fetch_one(&pool)
            .await
            .unwrap();
        let tracks: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tracks")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(albums, 12);
        assert_eq!(styles, 19);
        assert_eq!(tracks, 99);
    }

    #[tokio::test]
    async fn test_tracks_reference_existing_albums() {
        let pool = SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database");

        sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await.unwrap();
        crate::db::init::create_schema(&pool).await.unwrap();
        seed_demo_catalog(&pool).await.unwrap();

        let orphans: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM tracks
            WHERE album NOT IN (SELECT asin FROM albums)
            "#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(orphans, 0);
    }
}
