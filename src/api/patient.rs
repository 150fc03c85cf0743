use actix_web::{HttpResponse, web};

use crate::api::crud;
use crate::model::patient::PatientInput;
use crate::service::{PatientService, ServiceError};

/// Get list of all patients
#[utoipa::path(
    get,
    path = "/api/v1/patients/",
    responses(
        (status = 200, description = "All patients", body = [crate::model::patient::Patient]),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse)
    ),
    tag = "Patient"
)]
pub async fn list_patients(
    service: web::Data<PatientService>,
) -> Result<HttpResponse, ServiceError> {
    crud::list(service).await
}

/// Create a new patient
#[utoipa::path(
    post,
    path = "/api/v1/patients/",
    request_body = PatientInput,
    responses(
        (status = 201, description = "Patient created", body = crate::model::patient::Patient),
        (status = 400, description = "Missing or invalid fields", body = crate::api::MessageResponse, example = json!({
            "message": "patient_name is required"
        })),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse, example = json!({
            "message": "Error creating patient"
        }))
    ),
    tag = "Patient"
)]
pub async fn create_patient(
    service: web::Data<PatientService>,
    payload: web::Json<PatientInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::create(service, payload).await
}

/// Get patient by ID
#[utoipa::path(
    get,
    path = "/api/v1/patients/{patient_id}",
    params(
        ("patient_id" = u64, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Patient found", body = crate::model::patient::Patient),
        (status = 404, description = "Patient not found", body = crate::api::MessageResponse, example = json!({
            "message": "Patient not found"
        }))
    ),
    tag = "Patient"
)]
pub async fn get_patient(
    service: web::Data<PatientService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::get(service, path).await
}

/// Update patient
#[utoipa::path(
    put,
    path = "/api/v1/patients/{patient_id}",
    params(
        ("patient_id" = u64, Path, description = "Patient ID")
    ),
    request_body = PatientInput,
    responses(
        (status = 200, description = "Patient updated", body = crate::model::patient::Patient),
        (status = 400, description = "Invalid fields", body = crate::api::MessageResponse),
        (status = 404, description = "Patient not found", body = crate::api::MessageResponse)
    ),
    tag = "Patient"
)]
pub async fn update_patient(
    service: web::Data<PatientService>,
    path: web::Path<u64>,
    payload: web::Json<PatientInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::update(service, path, payload).await
}

/// Delete patient
#[utoipa::path(
    delete,
    path = "/api/v1/patients/{patient_id}",
    params(
        ("patient_id" = u64, Path, description = "Patient ID")
    ),
    responses(
        (status = 200, description = "Patient deleted", body = crate::api::MessageResponse, example = json!({
            "message": "Patient successfully deleted"
        })),
        (status = 404, description = "Patient not found", body = crate::api::MessageResponse),
        (status = 409, description = "Patient still referenced", body = crate::api::MessageResponse)
    ),
    tag = "Patient"
)]
pub async fn delete_patient(
    service: web::Data<PatientService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::delete(service, path).await
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{Value, json};

    use crate::api::test_support::test_app;

    #[actix_web::test]
    async fn create_with_birth_date() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/patients/")
            .set_json(json!({"patient_name": "Jonas Weber", "date_of_birth": "1984-03-09", "doctor_id": 2}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "patient_id": 1,
                "patient_name": "Jonas Weber",
                "date_of_birth": "1984-03-09",
                "doctor_id": 2
            })
        );
    }

    #[actix_web::test]
    async fn bad_birth_dates_are_400() {
        let app = test_app!();

        for dob in ["2999-01-01", "09/03/1984"] {
            let req = test::TestRequest::post()
                .uri("/api/v1/patients/")
                .set_json(json!({"patient_name": "Jonas Weber", "date_of_birth": dob}))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", dob);
        }
    }

    #[actix_web::test]
    async fn delete_unknown_is_404() {
        let app = test_app!();

        let req = test::TestRequest::delete().uri("/api/v1/patients/5").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Patient not found"}));
    }
}
