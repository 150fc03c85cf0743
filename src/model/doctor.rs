use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::Resource;
use crate::service::ServiceError;
use crate::storage::mysql::Table;
use crate::utils::db_utils::SqlValue;
use crate::utils::validation::{not_blank, required, required_text, trimmed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Doctor {
    #[schema(example = 1)]
    pub doctor_id: u64,

    #[schema(example = "Dr. Amara Okafor")]
    pub doctor_name: String,

    #[schema(example = "Cardiologist", nullable = true)]
    pub specialization: Option<String>,

    #[schema(example = 1)]
    pub department_id: u64,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct DoctorInput {
    #[schema(example = "Dr. Amara Okafor")]
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 100, message = "must be at most 100 characters"), custom(function = "not_blank"))]
    pub doctor_name: Option<String>,

    #[schema(example = "Cardiologist")]
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub specialization: Option<String>,

    #[schema(example = 1)]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub department_id: Option<u64>,
}

impl Resource for Doctor {
    const NAME: &'static str = "Doctor";
    type Input = DoctorInput;

    fn id(&self) -> u64 {
        self.doctor_id
    }

    fn set_id(&mut self, id: u64) {
        self.doctor_id = id;
    }

    fn build(input: DoctorInput) -> Result<Self, ServiceError> {
        Ok(Doctor {
            doctor_id: 0,
            doctor_name: required_text(input.doctor_name, "doctor_name")?,
            specialization: input.specialization,
            department_id: required(input.department_id, "department_id")?,
        })
    }

    fn apply(&mut self, input: DoctorInput) {
        if let Some(name) = input.doctor_name {
            self.doctor_name = name.trim().to_string();
        }
        if input.specialization.is_some() {
            self.specialization = input.specialization;
        }
        if let Some(department_id) = input.department_id {
            self.department_id = department_id;
        }
    }

    fn is_empty(input: &DoctorInput) -> bool {
        input.doctor_name.is_none() && input.specialization.is_none() && input.department_id.is_none()
    }
}

impl Table for Doctor {
    const TABLE: &'static str = "doctors";
    const ID_COLUMN: &'static str = "doctor_id";
    const COLUMNS: &'static [&'static str] = &["doctor_name", "specialization", "department_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.doctor_name.clone().into(),
            self.specialization.clone().into(),
            self.department_id.into(),
        ]
    }
}
