//! Product repository
//!
//! Rows are rendered to JSON by Postgres and handed back without a typed
//! shape, so whatever columns the `products` table has end up in the
//! response. Columns whose values don't survive a JSON number or need a
//! zone are rendered the way storefront clients already parse them:
//! `bigint`, `numeric` and `money` as strings, timestamps and dates as
//! UTC ISO-8601 strings with millisecond precision and a `Z` suffix.

use serde_json::value::RawValue;
use sqlx::types::Json;
use sqlx::PgPool;

/// Columns of `products` in table order, resolved through the search path
const COLUMNS_SQL: &str = r#"
    SELECT a.attname::text, a.atttypid::regtype::text
    FROM pg_attribute a
    WHERE a.attrelid = to_regclass('products')
      AND a.attnum > 0
      AND NOT a.attisdropped
    ORDER BY a.attnum
"#;

const ISO_UTC: &str = r#"'YYYY-MM-DD"T"HH24:MI:SS.MS"Z"'"#;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every row of `products`, one JSON object per row.
    ///
    /// No ordering, filtering or pagination.
    pub async fn list_all(&self) -> Result<Vec<Box<RawValue>>, DbError> {
        let columns: Vec<(String, String)> =
            sqlx::query_as(COLUMNS_SQL).fetch_all(self.pool).await?;

        // A missing table yields no columns; the select below then fails
        // with Postgres' own "relation does not exist" error.
        let sql = select_sql(&columns);

        let rows: Vec<Json<Box<RawValue>>> =
            sqlx::query_scalar(&sql).fetch_all(self.pool).await?;

        tracing::debug!(count = rows.len(), "fetched products");

        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Select expression for one column, aliased back to its own name.
fn column_expr(name: &str, type_name: &str) -> String {
    let ident = quote_ident(name);
    let expr = match type_name {
        "bigint" | "numeric" | "money" => format!("{}::text", ident),
        "timestamp with time zone" => {
            format!("to_char({} AT TIME ZONE 'UTC', {})", ident, ISO_UTC)
        }
        "timestamp without time zone" => format!("to_char({}, {})", ident, ISO_UTC),
        "date" => format!("to_char({}::timestamp, {})", ident, ISO_UTC),
        _ => ident.clone(),
    };
    format!("{} AS {}", expr, ident)
}

fn select_sql(columns: &[(String, String)]) -> String {
    let list = columns
        .iter()
        .map(|(name, type_name)| column_expr(name, type_name))
        .collect::<Vec<_>>()
        .join(", ");

    format!("SELECT row_to_json(p) FROM (SELECT {} FROM products) p", list)
}
