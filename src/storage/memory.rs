use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::model::Resource;
use crate::storage::{Store, StoreError};

/// Process-local store. Ids start at 1 and are never reused.
/// Foreign keys are not checked.
pub struct MemoryStore<R> {
    rows: RwLock<BTreeMap<u64, R>>,
    next_id: AtomicU64,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl<R: Resource> Store<R> for MemoryStore<R> {
    async fn list(&self) -> Result<Vec<R>, StoreError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.values().cloned().collect())
    }

    async fn find(&self, id: u64) -> Result<Option<R>, StoreError> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.get(&id).cloned())
    }

    async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        record.set_id(id);
        rows.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, record: &R) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        match rows.get_mut(&record.id()) {
            Some(row) => {
                *row = record.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        Ok(rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::department::Department;

    fn department(name: &str) -> Department {
        Department {
            department_id: 0,
            department_name: name.to_string(),
            hospital_id: 1,
        }
    }

    #[actix_web::test]
    async fn assigns_increasing_ids_and_lists_in_order() {
        let store = MemoryStore::<Department>::new();

        let a = store.insert(department("Cardiology")).await.unwrap();
        let b = store.insert(department("Oncology")).await.unwrap();
        assert_eq!((a.department_id, b.department_id), (1, 2));

        let names: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.department_name)
            .collect();
        assert_eq!(names, ["Cardiology", "Oncology"]);
    }

    #[actix_web::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryStore::<Department>::new();

        let first = store.insert(department("Cardiology")).await.unwrap();
        assert!(store.delete(first.department_id).await.unwrap());
        assert!(!store.delete(first.department_id).await.unwrap());

        let second = store.insert(department("Oncology")).await.unwrap();
        assert_eq!(second.department_id, 2);
        assert_eq!(store.find(first.department_id).await.unwrap(), None);
    }

    #[actix_web::test]
    async fn update_reports_missing_rows() {
        let store = MemoryStore::<Department>::new();

        let mut dept = store.insert(department("Cardiology")).await.unwrap();
        dept.department_name = "Neurology".into();
        assert!(store.update(&dept).await.unwrap());
        assert_eq!(store.find(1).await.unwrap().unwrap().department_name, "Neurology");

        dept.department_id = 99;
        assert!(!store.update(&dept).await.unwrap());
    }
}
