pub mod department;
pub mod doctor;
pub mod hospital;
pub mod patient;

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::service::ServiceError;

/// A named entity type exposed through CRUD endpoints.
///
/// A record is built from an `Input` payload on create and patched in place
/// from the same payload type on update; the store assigns the id.
pub trait Resource: Clone + Serialize + Send + Sync + Unpin + 'static {
    /// Display name, e.g. "Department".
    const NAME: &'static str;

    type Input: DeserializeOwned + Validate + Send + 'static;

    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);

    /// Checks required fields and builds an unsaved record (id 0).
    fn build(input: Self::Input) -> Result<Self, ServiceError>;

    /// Overwrites every field present in `input`.
    fn apply(&mut self, input: Self::Input);

    /// True when the payload carries no field at all.
    fn is_empty(input: &Self::Input) -> bool;
}
