use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::Resource;
use crate::service::ServiceError;
use crate::storage::mysql::Table;
use crate::utils::db_utils::SqlValue;
use crate::utils::validation::{not_blank, required, required_text, trimmed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(example = json!({
    "department_id": 1,
    "department_name": "Cardiology",
    "hospital_id": 1
}))]
pub struct Department {
    #[schema(example = 1)]
    pub department_id: u64,

    #[schema(example = "Cardiology")]
    pub department_name: String,

    #[schema(example = 1)]
    pub hospital_id: u64,
}

/// Payload for both POST (all fields required) and PUT (any subset).
#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct DepartmentInput {
    #[schema(example = "Cardiology")]
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 100, message = "must be at most 100 characters"), custom(function = "not_blank"))]
    pub department_name: Option<String>,

    #[schema(example = 1)]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub hospital_id: Option<u64>,
}

impl Resource for Department {
    const NAME: &'static str = "Department";
    type Input = DepartmentInput;

    fn id(&self) -> u64 {
        self.department_id
    }

    fn set_id(&mut self, id: u64) {
        self.department_id = id;
    }

    fn build(input: DepartmentInput) -> Result<Self, ServiceError> {
        Ok(Department {
            department_id: 0,
            department_name: required_text(input.department_name, "department_name")?,
            hospital_id: required(input.hospital_id, "hospital_id")?,
        })
    }

    fn apply(&mut self, input: DepartmentInput) {
        if let Some(name) = input.department_name {
            self.department_name = name.trim().to_string();
        }
        if let Some(hospital_id) = input.hospital_id {
            self.hospital_id = hospital_id;
        }
    }

    fn is_empty(input: &DepartmentInput) -> bool {
        input.department_name.is_none() && input.hospital_id.is_none()
    }
}

impl Table for Department {
    const TABLE: &'static str = "departments";
    const ID_COLUMN: &'static str = "department_id";
    const COLUMNS: &'static [&'static str] = &["department_name", "hospital_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.department_name.clone().into(), self.hospital_id.into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: Option<&str>, hospital_id: Option<u64>) -> DepartmentInput {
        DepartmentInput {
            department_name: name.map(str::to_string),
            hospital_id,
        }
    }

    #[test]
    fn build_requires_every_field() {
        let dept = Department::build(input(Some(" Cardiology "), Some(3))).unwrap();
        assert_eq!(dept.department_name, "Cardiology");
        assert_eq!(dept.hospital_id, 3);
        assert_eq!(dept.department_id, 0);

        let err = Department::build(input(None, Some(3))).unwrap_err();
        assert_eq!(err.to_string(), "department_name is required");

        let err = Department::build(input(Some("Cardiology"), None)).unwrap_err();
        assert_eq!(err.to_string(), "hospital_id is required");
    }

    #[test]
    fn field_rules() {
        assert!(input(Some("Oncology"), Some(1)).validate().is_ok());
        assert!(input(Some("  "), Some(1)).validate().is_err());
        assert!(input(Some(&"x".repeat(101)), Some(1)).validate().is_err());
        assert!(input(Some("Oncology"), Some(0)).validate().is_err());
        // absent fields are not checked here
        assert!(input(None, None).validate().is_ok());
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut dept = Department {
            department_id: 4,
            department_name: "Cardiology".into(),
            hospital_id: 1,
        };

        dept.apply(input(None, Some(2)));
        assert_eq!(dept.department_name, "Cardiology");
        assert_eq!(dept.hospital_id, 2);

        dept.apply(input(Some("Neurology"), None));
        assert_eq!(dept.department_name, "Neurology");
        assert_eq!(dept.department_id, 4);

        assert!(Department::is_empty(&input(None, None)));
        assert!(!Department::is_empty(&input(None, Some(2))));
    }
}
