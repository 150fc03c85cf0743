use thiserror::Error;
use validator::ValidationErrors;

use crate::storage::StoreError;

/// Structured failure of a service operation. The route layer maps each
/// variant to an HTTP status (see `api::error`).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{context}")]
    Storage {
        context: String,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound(format!("{} not found", entity))
    }
}

/// One `field: message` line per failed rule, fields in name order. Rules
/// without a message fall back to their code.
impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        let mut lines: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let reason = e.message.as_deref().unwrap_or(&e.code);
                    format!("{}: {}", field, reason)
                })
            })
            .collect();
        lines.sort();
        ServiceError::Validation(lines.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn validation_message_names_fields_without_values() {
        let mut errors = ValidationErrors::new();
        let mut range = ValidationError::new("range");
        range.message = Some("must be a positive id".into());
        range.add_param("value".into(), &0);
        errors.add("hospital_id", range);
        errors.add("department_name", ValidationError::new("blank"));

        let err = ServiceError::from(errors);
        assert_eq!(
            err.to_string(),
            "department_name: blank; hospital_id: must be a positive id"
        );
    }
}
