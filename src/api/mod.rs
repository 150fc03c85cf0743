pub mod crud;
pub mod department;
pub mod doctor;
pub mod error;
pub mod hospital;
pub mod patient;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of confirmations and of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Department not found")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
