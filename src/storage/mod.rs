pub mod memory;
pub mod mysql;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Resource;

pub use memory::MemoryStore;
pub use mysql::MySqlStore;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Foreign-key violation: the row points at a missing parent, or is
    /// still referenced by a child row.
    #[error("reference violation: {0}")]
    Reference(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence collaborator for one resource type.
#[async_trait]
pub trait Store<R: Resource>: Send + Sync {
    /// All rows, ordered by id.
    async fn list(&self) -> Result<Vec<R>, StoreError>;

    async fn find(&self, id: u64) -> Result<Option<R>, StoreError>;

    /// Persists a new record and returns it with its generated id.
    async fn insert(&self, record: R) -> Result<R, StoreError>;

    /// Overwrites the row with `record.id()`. Returns false if no such row.
    async fn update(&self, record: &R) -> Result<bool, StoreError>;

    /// Returns false if no such row.
    async fn delete(&self, id: u64) -> Result<bool, StoreError>;
}
