mod error;

pub use error::ServiceError;

use std::sync::Arc;

use actix_web::web::Data;
use sqlx::MySqlPool;
use tracing::{error, info, instrument};
use validator::Validate;

use crate::model::Resource;
use crate::model::department::Department;
use crate::model::doctor::Doctor;
use crate::model::hospital::Hospital;
use crate::model::patient::Patient;
use crate::storage::mysql::Table;
use crate::storage::{MemoryStore, MySqlStore, Store, StoreError};

/// Validation and orchestration between the route layer and a store.
pub struct ResourceService<R: Resource> {
    store: Arc<dyn Store<R>>,
}

pub type HospitalService = ResourceService<Hospital>;
pub type DepartmentService = ResourceService<Department>;
pub type DoctorService = ResourceService<Doctor>;
pub type PatientService = ResourceService<Patient>;

impl<R: Resource> ResourceService<R> {
    pub fn new(store: Arc<dyn Store<R>>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::<R>::new()))
    }

    pub async fn list(&self) -> Result<Vec<R>, ServiceError> {
        self.store
            .list()
            .await
            .map_err(|e| storage_failure::<R>("fetching", e))
    }

    pub async fn get(&self, id: u64) -> Result<R, ServiceError> {
        self.store
            .find(id)
            .await
            .map_err(|e| storage_failure::<R>("fetching", e))?
            .ok_or_else(|| ServiceError::not_found(R::NAME))
    }

    #[instrument(name = "create", skip_all, fields(resource = R::NAME))]
    pub async fn create(&self, input: R::Input) -> Result<R, ServiceError> {
        input.validate()?;
        let record = R::build(input)?;

        let created = self.store.insert(record).await.map_err(|e| match e {
            StoreError::Reference(msg) => ServiceError::Validation(reference_message::<R>(&msg)),
            other => storage_failure::<R>("creating", other),
        })?;

        info!(id = created.id(), "{} created", R::NAME);
        Ok(created)
    }

    #[instrument(name = "update", skip(self, input), fields(resource = R::NAME))]
    pub async fn update(&self, id: u64, input: R::Input) -> Result<R, ServiceError> {
        input.validate()?;
        if R::is_empty(&input) {
            return Err(ServiceError::Validation("No fields provided for update".to_string()));
        }

        let mut record = self.get(id).await?;
        record.apply(input);

        let found = self.store.update(&record).await.map_err(|e| match e {
            StoreError::Reference(msg) => ServiceError::Validation(reference_message::<R>(&msg)),
            other => storage_failure::<R>("updating", other),
        })?;

        // deleted between the read and the write
        if !found {
            return Err(ServiceError::not_found(R::NAME));
        }

        info!("{} updated", R::NAME);
        Ok(record)
    }

    #[instrument(name = "delete", skip(self), fields(resource = R::NAME))]
    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let removed = self.store.delete(id).await.map_err(|e| match e {
            StoreError::Reference(_) => ServiceError::Conflict(format!(
                "{} is still referenced by other records",
                R::NAME
            )),
            other => storage_failure::<R>("deleting", other),
        })?;

        if !removed {
            return Err(ServiceError::not_found(R::NAME));
        }

        info!("{} deleted", R::NAME);
        Ok(())
    }
}

fn storage_failure<R: Resource>(action: &str, source: StoreError) -> ServiceError {
    error!(error = %source, resource = R::NAME, "Storage failure while {}", action);
    ServiceError::Storage {
        context: format!("Error {} {}", action, R::NAME.to_lowercase()),
        source,
    }
}

fn reference_message<R: Resource>(detail: &str) -> String {
    tracing::debug!(detail, "Reference violation on {}", R::NAME);
    format!("{} references a record that does not exist", R::NAME)
}

/// One service per resource, shared with every worker through `web::Data`.
#[derive(Clone)]
pub struct Services {
    pub hospitals: Data<HospitalService>,
    pub departments: Data<DepartmentService>,
    pub doctors: Data<DoctorService>,
    pub patients: Data<PatientService>,
}

impl Services {
    pub fn mysql(pool: MySqlPool) -> Self {
        fn service<R: Table>(pool: &MySqlPool) -> Data<ResourceService<R>> {
            Data::new(ResourceService::new(Arc::new(MySqlStore::<R>::new(pool.clone()))))
        }

        Self {
            hospitals: service(&pool),
            departments: service(&pool),
            doctors: service(&pool),
            patients: service(&pool),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            hospitals: Data::new(ResourceService::in_memory()),
            departments: Data::new(ResourceService::in_memory()),
            doctors: Data::new(ResourceService::in_memory()),
            patients: Data::new(ResourceService::in_memory()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::department::DepartmentInput;
    use async_trait::async_trait;

    fn input(name: Option<&str>, hospital_id: Option<u64>) -> DepartmentInput {
        DepartmentInput {
            department_name: name.map(str::to_string),
            hospital_id,
        }
    }

    #[actix_web::test]
    async fn create_then_get() {
        let service = DepartmentService::in_memory();

        let created = service.create(input(Some("Cardiology"), Some(1))).await.unwrap();
        assert_eq!(created.department_id, 1);

        let fetched = service.get(created.department_id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn create_rejects_invalid_payloads() {
        let service = DepartmentService::in_memory();

        let err = service.create(input(None, Some(1))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = service.create(input(Some(" "), Some(1))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        assert!(service.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn update_merges_and_checks_existence() {
        let service = DepartmentService::in_memory();
        let created = service.create(input(Some("Cardiology"), Some(1))).await.unwrap();

        let updated = service
            .update(created.department_id, input(Some("Neurology"), None))
            .await
            .unwrap();
        assert_eq!(updated.department_name, "Neurology");
        assert_eq!(updated.hospital_id, 1);

        let err = service.update(42, input(Some("Neurology"), None)).await.unwrap_err();
        assert_eq!(err.to_string(), "Department not found");

        let err = service.update(created.department_id, input(None, None)).await.unwrap_err();
        assert_eq!(err.to_string(), "No fields provided for update");
    }

    #[actix_web::test]
    async fn delete_is_not_repeatable() {
        let service = DepartmentService::in_memory();
        let created = service.create(input(Some("Cardiology"), Some(1))).await.unwrap();

        service.delete(created.department_id).await.unwrap();
        assert!(matches!(
            service.delete(created.department_id).await,
            Err(ServiceError::NotFound(_))
        ));
        assert!(matches!(
            service.get(created.department_id).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    /// Store that fails every call the way a broken database would.
    struct FailingStore;

    #[async_trait]
    impl Store<Department> for FailingStore {
        async fn list(&self) -> Result<Vec<Department>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
        async fn find(&self, _id: u64) -> Result<Option<Department>, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
        async fn insert(&self, _record: Department) -> Result<Department, StoreError> {
            Err(StoreError::Reference("fk_departments_hospital".into()))
        }
        async fn update(&self, _record: &Department) -> Result<bool, StoreError> {
            Err(StoreError::Unavailable("down".into()))
        }
        async fn delete(&self, _id: u64) -> Result<bool, StoreError> {
            Err(StoreError::Reference("fk_doctors_department".into()))
        }
    }

    #[actix_web::test]
    async fn storage_errors_become_structured_results() {
        let service = DepartmentService::new(Arc::new(FailingStore));

        let err = service.list().await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage { .. }));
        assert_eq!(err.to_string(), "Error fetching department");

        let err = service.create(input(Some("Cardiology"), Some(9))).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = service.delete(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
