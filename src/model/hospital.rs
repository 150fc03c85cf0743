use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::Resource;
use crate::service::ServiceError;
use crate::storage::mysql::Table;
use crate::utils::db_utils::SqlValue;
use crate::utils::validation::{not_blank, required_text, trimmed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Hospital {
    #[schema(example = 1)]
    pub hospital_id: u64,

    #[schema(example = "St. Luke's General")]
    pub hospital_name: String,

    #[schema(example = "12 Harbour Road", nullable = true)]
    pub address: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Validate, ToSchema)]
pub struct HospitalInput {
    #[schema(example = "St. Luke's General")]
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 150, message = "must be at most 150 characters"), custom(function = "not_blank"))]
    pub hospital_name: Option<String>,

    #[schema(example = "12 Harbour Road")]
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(length(max = 255, message = "must be at most 255 characters"))]
    pub address: Option<String>,
}

impl Resource for Hospital {
    const NAME: &'static str = "Hospital";
    type Input = HospitalInput;

    fn id(&self) -> u64 {
        self.hospital_id
    }

    fn set_id(&mut self, id: u64) {
        self.hospital_id = id;
    }

    fn build(input: HospitalInput) -> Result<Self, ServiceError> {
        Ok(Hospital {
            hospital_id: 0,
            hospital_name: required_text(input.hospital_name, "hospital_name")?,
            address: input.address,
        })
    }

    fn apply(&mut self, input: HospitalInput) {
        if let Some(name) = input.hospital_name {
            self.hospital_name = name.trim().to_string();
        }
        if input.address.is_some() {
            self.address = input.address;
        }
    }

    fn is_empty(input: &HospitalInput) -> bool {
        input.hospital_name.is_none() && input.address.is_none()
    }
}

impl Table for Hospital {
    const TABLE: &'static str = "hospitals";
    const ID_COLUMN: &'static str = "hospital_id";
    const COLUMNS: &'static [&'static str] = &["hospital_name", "address"];

    fn values(&self) -> Vec<SqlValue> {
        vec![self.hospital_name.clone().into(), self.address.clone().into()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_optional() {
        let hospital = Hospital::build(HospitalInput {
            hospital_name: Some("Mercy".into()),
            address: None,
        })
        .unwrap();
        assert_eq!(hospital.address, None);
        assert_eq!(
            hospital.values(),
            vec![SqlValue::String("Mercy".into()), SqlValue::Null]
        );
    }

    #[test]
    fn apply_keeps_address_when_absent() {
        let mut hospital = Hospital {
            hospital_id: 1,
            hospital_name: "Mercy".into(),
            address: Some("1 Main St".into()),
        };
        hospital.apply(HospitalInput {
            hospital_name: Some("Mercy West".into()),
            address: None,
        });
        assert_eq!(hospital.hospital_name, "Mercy West");
        assert_eq!(hospital.address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn name_limit_applies_after_trimming() {
        let padded = format!("  {}  ", "h".repeat(150));
        let input: HospitalInput =
            serde_json::from_value(serde_json::json!({ "hospital_name": padded })).unwrap();
        assert!(input.validate().is_ok());
        assert_eq!(input.hospital_name.as_deref().map(str::len), Some(150));

        let input: HospitalInput =
            serde_json::from_value(serde_json::json!({ "hospital_name": "h".repeat(151) })).unwrap();
        let err = crate::service::ServiceError::from(input.validate().unwrap_err());
        assert_eq!(err.to_string(), "hospital_name: must be at most 150 characters");
    }
}
