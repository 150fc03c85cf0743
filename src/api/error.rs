use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError, web};

use crate::api::MessageResponse;
use crate::service::ServiceError;

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Storage display is the operation context, never the driver text
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.to_string()))
    }
}

/// Routes body extraction failures (no body, wrong content type, bad JSON)
/// through the same `{"message": ...}` shape as service errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Missing JSON body".to_string(),
        JsonPayloadError::Deserialize(e) if e.is_eof() => "Missing JSON body".to_string(),
        other => format!("Invalid JSON body: {}", other),
    };
    tracing::debug!(error = %err, "Rejected request body");
    ServiceError::Validation(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoreError;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn storage_errors_hide_driver_details() {
        let err = ServiceError::Storage {
            context: "Error creating department".into(),
            source: StoreError::Unavailable("connection refused on 10.0.0.7".into()),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Error creating department"}));
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            ServiceError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServiceError::not_found("Doctor").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ServiceError::Conflict("x".into()).status_code(), StatusCode::CONFLICT);
    }
}
