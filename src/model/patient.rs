use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::Resource;
use crate::service::ServiceError;
use crate::storage::mysql::Table;
use crate::utils::db_utils::SqlValue;
use crate::utils::validation::{not_blank, not_in_future, required_text, trimmed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Patient {
    #[schema(example = 1)]
    pub patient_id: u64,

    #[schema(example = "Jonas Weber")]
    pub patient_name: String,

    #[schema(example = "1984-03-09", value_type = Option<String>, format = "date", nullable = true)]
    pub date_of_birth: Option<NaiveDate>,

    /// Attending doctor, if one is assigned
    #[schema(example = 1, nullable = true)]
    pub doctor_id: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct PatientInput {
    #[schema(example = "Jonas Weber")]
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 100, message = "must be at most 100 characters"), custom(function = "not_blank"))]
    pub patient_name: Option<String>,

    #[schema(example = "1984-03-09", value_type = Option<String>, format = "date")]
    #[validate(custom(function = "not_in_future"))]
    pub date_of_birth: Option<NaiveDate>,

    #[schema(example = 1)]
    #[validate(range(min = 1, message = "must be a positive id"))]
    pub doctor_id: Option<u64>,
}

impl Resource for Patient {
    const NAME: &'static str = "Patient";
    type Input = PatientInput;

    fn id(&self) -> u64 {
        self.patient_id
    }

    fn set_id(&mut self, id: u64) {
        self.patient_id = id;
    }

    fn build(input: PatientInput) -> Result<Self, ServiceError> {
        Ok(Patient {
            patient_id: 0,
            patient_name: required_text(input.patient_name, "patient_name")?,
            date_of_birth: input.date_of_birth,
            doctor_id: input.doctor_id,
        })
    }

    fn apply(&mut self, input: PatientInput) {
        if let Some(name) = input.patient_name {
            self.patient_name = name.trim().to_string();
        }
        if input.date_of_birth.is_some() {
            self.date_of_birth = input.date_of_birth;
        }
        if input.doctor_id.is_some() {
            self.doctor_id = input.doctor_id;
        }
    }

    fn is_empty(input: &PatientInput) -> bool {
        input.patient_name.is_none() && input.date_of_birth.is_none() && input.doctor_id.is_none()
    }
}

impl Table for Patient {
    const TABLE: &'static str = "patients";
    const ID_COLUMN: &'static str = "patient_id";
    const COLUMNS: &'static [&'static str] = &["patient_name", "date_of_birth", "doctor_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.patient_name.clone().into(),
            self.date_of_birth.into(),
            self.doctor_id.into(),
        ]
    }
}
