use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use validator::ValidationError;

use crate::service::ServiceError;

/// Field rule for `#[validate(custom(...))]`: rejects empty and whitespace-only text.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Field rule for `#[validate(custom(...))]`: the date may not lie in the future.
pub fn not_in_future(value: &NaiveDate) -> Result<(), ValidationError> {
    if *value > Utc::now().date_naive() {
        let mut err = ValidationError::new("future_date");
        err.message = Some("must not be in the future".into());
        return Err(err);
    }
    Ok(())
}

/// `deserialize_with` for optional text: surrounding whitespace is dropped
/// on the way in, so length rules see the value that gets stored.
pub fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.map(|text| text.trim().to_string()))
}

pub fn required<T>(value: Option<T>, field: &str) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::Validation(format!("{} is required", field)))
}

/// Required text field, stored trimmed.
pub fn required_text(value: Option<String>, field: &str) -> Result<String, ServiceError> {
    let text = required(value, field)?;
    not_blank(&text).map_err(|_| ServiceError::Validation(format!("{} must not be empty", field)))?;
    Ok(text.trim().to_string())
}
