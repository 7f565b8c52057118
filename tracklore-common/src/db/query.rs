//! Generic query execution
//!
//! Runs literal SQL text against the catalog and returns the result set
//! untouched: rows in engine order, each value carried as the SQLite
//! storage class the engine reported. No parameter binding, no retries;
//! driver errors propagate to the caller.

use crate::Result;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use std::fmt;

/// One SQLite storage-class value
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SqlValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view; integers widen to f64
    pub fn as_real(&self) -> Option<f64> {
        match self {
            SqlValue::Integer(i) => Some(*i as f64),
            SqlValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// JSON view of the value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            SqlValue::Null => serde_json::Value::Null,
            SqlValue::Integer(i) => serde_json::Value::from(*i),
            SqlValue::Real(r) => serde_json::Number::from_f64(*r)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            SqlValue::Text(s) => serde_json::Value::from(s.clone()),
            SqlValue::Blob(b) => serde_json::Value::from(format!("<blob {} bytes>", b.len())),
        }
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Null => write!(f, "NULL"),
            SqlValue::Integer(i) => write!(f, "{}", i),
            SqlValue::Real(r) => write!(f, "{}", r),
            SqlValue::Text(s) => write!(f, "{}", s),
            SqlValue::Blob(b) => write!(f, "<blob {} bytes>", b.len()),
        }
    }
}

/// Tabular result of one query
///
/// Column names come from the driver's row metadata, so an empty result
/// carries no column names.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl ResultSet {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value at (row index, column name); None when either is missing
    pub fn value(&self, row: usize, column: &str) -> Option<&SqlValue> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)
    }

    /// Rows as JSON objects keyed by column name
    pub fn to_json(&self) -> Vec<serde_json::Value> {
        self.rows
            .iter()
            .map(|row| {
                let map: serde_json::Map<String, serde_json::Value> = self
                    .columns
                    .iter()
                    .cloned()
                    .zip(row.iter().map(SqlValue::to_json))
                    .collect();
                serde_json::Value::Object(map)
            })
            .collect()
    }
}

/// Execute one SQL statement and collect its full result set
pub async fn run_query(pool: &SqlitePool, sql: &str) -> Result<ResultSet> {
    let fetched = sqlx::query(sql).fetch_all(pool).await?;

    let columns = fetched
        .first()
        .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
        .unwrap_or_default();

    let mut rows = Vec::with_capacity(fetched.len());
    for row in &fetched {
        let mut values = Vec::with_capacity(row.len());
        for index in 0..row.len() {
            values.push(decode_value(row, index)?);
        }
        rows.push(values);
    }

    Ok(ResultSet { columns, rows })
}

/// Decode one cell into its storage class
fn decode_value(row: &SqliteRow, index: usize) -> Result<SqlValue> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(SqlValue::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" => SqlValue::Integer(row.try_get(index)?),
        "REAL" => SqlValue::Real(row.try_get(index)?),
        "BLOB" => SqlValue::Blob(row.try_get(index)?),
        // TEXT plus the date/time decltypes SQLite stores as text
        _ => SqlValue::Text(row.try_get(index)?),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        SqlitePool::connect("sqlite::memory:")
            .await
            .expect("Failed to create in-memory database")
    }

    #[tokio::test]
    async fn test_decodes_all_storage_classes() {
        let pool = memory_pool().await;

        let result = run_query(
            &pool,
            "SELECT 42 AS i, 1.5 AS r, 'hello' AS t, x'DEADBEEF' AS b, NULL AS n",
        )
        .await
        .unwrap();

        assert_eq!(result.columns, vec!["i", "r", "t", "b", "n"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result.value(0, "i"), Some(&SqlValue::Integer(42)));
        assert_eq!(result.value(0, "r"), Some(&SqlValue::Real(1.5)));
        assert_eq!(
            result.value(0, "t"),
            Some(&SqlValue::Text("hello".to_string()))
        );
        assert_eq!(
            result.value(0, "b"),
            Some(&SqlValue::Blob(vec![0xDE, 0xAD, 0xBE, 0xEF]))
        );
        assert_eq!(result.value(0, "n"), Some(&SqlValue::Null));
    }

    #[tokio::test]
    async fn test_rows_in_engine_order() {
        let pool = memory_pool().await;

        let result = run_query(
            &pool,
            "SELECT column1 FROM (VALUES (3), (1), (2)) ORDER BY column1 DESC",
        )
        .await
        .unwrap();

        let values: Vec<i64> = result
            .rows
            .iter()
            .map(|row| row[0].as_integer().unwrap())
            .collect();
        assert_eq!(values, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_empty_result_has_no_columns() {
        let pool = memory_pool().await;
        crate::db::init::create_schema(&pool).await.unwrap();

        let result = run_query(&pool, "SELECT title FROM albums").await.unwrap();

        assert!(result.is_empty());
        assert!(result.columns.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_sql_propagates_driver_error() {
        let pool = memory_pool().await;

        let result = run_query(&pool, "SELECT FROM WHERE").await;

        assert!(matches!(result, Err(crate::Error::Database(_))));
    }

    #[tokio::test]
    async fn test_to_json_keys_rows_by_column() {
        let pool = memory_pool().await;

        let result = run_query(&pool, "SELECT 'Blur' AS title, 8 AS track_count")
            .await
            .unwrap();

        let json = result.to_json();
        assert_eq!(json.len(), 1);
        assert_eq!(json[0]["title"], "Blur");
        assert_eq!(json[0]["track_count"], 8);
    }

    #[tokio::test]
    async fn test_value_lookup_out_of_range() {
        let pool = memory_pool().await;

        let result = run_query(&pool, "SELECT 1 AS only").await.unwrap();

        assert_eq!(result.value(0, "missing"), None);
        assert_eq!(result.value(5, "only"), None);
    }
}
