use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::error::ErrorKind;
use sqlx::mysql::MySqlRow;
use sqlx::{FromRow, MySqlPool};
use tracing::debug;

use crate::model::Resource;
use crate::storage::{Store, StoreError};
use crate::utils::db_utils::{
    SqlValue, bind_values, build_delete_sql, build_exists_sql, build_insert_sql,
    build_select_all_sql, build_select_one_sql, build_update_sql,
};

/// Relational mapping of a resource: one table, one generated id column,
/// and the data columns in the order `values()` returns them.
pub trait Table: Resource + for<'r> FromRow<'r, MySqlRow> {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    const COLUMNS: &'static [&'static str];

    fn values(&self) -> Vec<SqlValue>;
}

pub struct MySqlStore<R> {
    pool: MySqlPool,
    select_all_sql: String,
    select_one_sql: String,
    insert_sql: String,
    update_sql: String,
    delete_sql: String,
    exists_sql: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Table> MySqlStore<R> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            select_all_sql: build_select_all_sql(R::TABLE, R::ID_COLUMN, R::COLUMNS),
            select_one_sql: build_select_one_sql(R::TABLE, R::ID_COLUMN, R::COLUMNS),
            insert_sql: build_insert_sql(R::TABLE, R::COLUMNS),
            update_sql: build_update_sql(R::TABLE, R::ID_COLUMN, R::COLUMNS),
            delete_sql: build_delete_sql(R::TABLE, R::ID_COLUMN),
            exists_sql: build_exists_sql(R::TABLE, R::ID_COLUMN),
            _resource: PhantomData,
        }
    }

    async fn exists(&self, id: u64) -> Result<bool, StoreError> {
        // EXISTS comes back as a BIGINT 0/1
        let exists = sqlx::query_scalar::<_, i64>(&self.exists_sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists > 0)
    }
}

/// MySQL reports foreign-key failures (1451/1452) as SQLSTATE 23000, which
/// sqlx classifies for us.
fn classify(err: sqlx::Error) -> StoreError {
    if let Some(db_err) = err.as_database_error() {
        if matches!(db_err.kind(), ErrorKind::ForeignKeyViolation) {
            return StoreError::Reference(db_err.message().to_string());
        }
    }
    StoreError::Database(err)
}

#[async_trait]
impl<R: Table> Store<R> for MySqlStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        debug!(sql = %self.select_all_sql, "Fetching {} rows", R::NAME);

        let rows = sqlx::query_as::<_, R>(&self.select_all_sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find(&self, id: u64) -> Result<Option<R>, StoreError> {
        let row = sqlx::query_as::<_, R>(&self.select_one_sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        debug!(sql = %self.insert_sql, values = ?record.values(), "Inserting {}", R::NAME);

        let result = bind_values(sqlx::query(&self.insert_sql), record.values())
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        record.set_id(result.last_insert_id());
        Ok(record)
    }

    async fn update(&self, record: &R) -> Result<bool, StoreError> {
        let mut values = record.values();
        values.push(SqlValue::U64(record.id()));

        debug!(sql = %self.update_sql, values = ?values, "Updating {}", R::NAME);

        let result = bind_values(sqlx::query(&self.update_sql), values)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        // zero affected rows also means "nothing changed"
        if result.rows_affected() == 0 {
            return self.exists(record.id()).await;
        }
        Ok(true)
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let result = sqlx::query(&self.delete_sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(classify)?;

        Ok(result.rows_affected() > 0)
    }
}
