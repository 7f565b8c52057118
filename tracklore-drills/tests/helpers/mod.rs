//! Drill test fixtures

use sqlx::SqlitePool;
use tracklore_common::db::init::create_schema;
use tracklore_common::db::query::ResultSet;
use tracklore_common::db::seed::seed_demo_catalog;

/// In-memory catalog populated with the demo seed
pub async fn demo_pool() -> SqlitePool {
    let pool = SqlitePool::connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();
    create_schema(&pool).await.unwrap();
    seed_demo_catalog(&pool).await.unwrap();

    pool
}

/// All values of one column as text, in row order
pub fn texts(result: &ResultSet, column: &str) -> Vec<String> {
    (0..result.len())
        .map(|row| {
            result
                .value(row, column)
                .and_then(|v| v.as_text())
                .unwrap_or_else(|| panic!("row {} has no text in column {}", row, column))
                .to_string()
        })
        .collect()
}

/// One row as (text, integer), using the first two columns
pub fn text_int_row(result: &ResultSet, row: usize) -> (String, i64) {
    let cells = &result.rows[row];
    (
        cells[0].as_text().expect("expected text cell").to_string(),
        cells[1].as_integer().expect("expected integer cell"),
    )
}
