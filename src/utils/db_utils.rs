use chrono::NaiveDate;
use sqlx::MySql;
use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    String(String),
    U64(u64),
    Date(NaiveDate),
    Null,
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::String(v)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        SqlValue::U64(v)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

/// ===============================
/// SQL statement builders
/// ===============================
pub fn build_select_all_sql(table: &str, id_column: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {}, {} FROM {} ORDER BY {} ASC",
        id_column,
        columns.join(", "),
        table,
        id_column
    )
}

pub fn build_select_one_sql(table: &str, id_column: &str, columns: &[&str]) -> String {
    format!(
        "SELECT {}, {} FROM {} WHERE {} = ?",
        id_column,
        columns.join(", "),
        table,
        id_column
    )
}

pub fn build_insert_sql(table: &str, columns: &[&str]) -> String {
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table,
        columns.join(", "),
        placeholders
    )
}

/// Values are bound in column order, the id last.
pub fn build_update_sql(table: &str, id_column: &str, columns: &[&str]) -> String {
    let set_clause = columns
        .iter()
        .map(|c| format!("{} = ?", c))
        .collect::<Vec<_>>()
        .join(", ");

    format!("UPDATE {} SET {} WHERE {} = ?", table, set_clause, id_column)
}

pub fn build_delete_sql(table: &str, id_column: &str) -> String {
    format!("DELETE FROM {} WHERE {} = ?", table, id_column)
}

pub fn build_exists_sql(table: &str, id_column: &str) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = ? LIMIT 1)",
        table, id_column
    )
}

/// ===============================
/// Bind values onto a query
/// ===============================
pub fn bind_values<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    values: Vec<SqlValue>,
) -> Query<'q, MySql, MySqlArguments> {
    for value in values {
        query = match value {
            SqlValue::String(v) => query.bind(v),
            SqlValue::U64(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }
    query
}
