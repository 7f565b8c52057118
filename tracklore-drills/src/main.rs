//! tracklore-drills - SQL drill runner
//!
//! Opens the record catalog, seeds the demo data on first run, executes
//! all eleven drills, and prints each result set.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracklore_common::config::{self, TomlConfig};
use tracklore_common::db::init::open_catalog;
use tracklore_common::db::query::ResultSet;
use tracklore_common::db::seed::{catalog_is_empty, seed_demo_catalog};

use tracklore_drills::{drills, report};

#[derive(Parser, Debug)]
#[command(name = "tracklore-drills")]
#[command(about = "Run the SQL drill exercises against the record catalog")]
struct Args {
    /// Catalog database file; falls back to TRACKLORE_DB, the config file,
    /// then the platform default
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Print results as JSON lines instead of text tables
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing; RUST_LOG wins, then the config file, then info
    let fallback = TomlConfig::load()
        .ok()
        .and_then(|config| config.log_level)
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting tracklore-drills");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let catalog_path = config::resolve_catalog_path(args.catalog.as_deref());
    info!("Catalog: {}", catalog_path.display());

    let pool = open_catalog(&catalog_path).await?;

    if catalog_is_empty(&pool).await? {
        info!("Catalog is empty, seeding demo data");
        seed_demo_catalog(&pool).await?;
    }

    print_drill("alison_artist", drills::alison_artist(&pool).await?, args.json);
    print_drill("exodus_artist", drills::exodus_artist(&pool).await?, args.json);
    print_drill("blur_songs", drills::blur_songs(&pool).await?, args.json);
    print_drill("heart_tracks", drills::heart_tracks(&pool).await?, args.json);
    print_drill("title_tracks", drills::title_tracks(&pool).await?, args.json);
    print_drill("eponymous_albums", drills::eponymous_albums(&pool).await?, args.json);
    print_drill("song_title_counts", drills::song_title_counts(&pool).await?, args.json);
    print_drill("best_value", drills::best_value(&pool).await?, args.json);
    print_drill("top_track_counts", drills::top_track_counts(&pool).await?, args.json);
    print_drill("rock_superstars", drills::rock_superstars(&pool).await?, args.json);
    print_drill("expensive_tastes", drills::expensive_tastes(&pool).await?, args.json);

    Ok(())
}

fn print_drill(name: &str, result: ResultSet, json: bool) {
    println!("== {}", name);
    if json {
        println!("{}", report::render_json_lines(&result));
    } else {
        println!("{}", report::render_table(&result));
    }
    println!();
}
