use actix_web::{HttpResponse, web};

use crate::api::crud;
use crate::model::hospital::HospitalInput;
use crate::service::{HospitalService, ServiceError};

/// Get list of all hospitals
#[utoipa::path(
    get,
    path = "/api/v1/hospitals/",
    responses(
        (status = 200, description = "All hospitals", body = [crate::model::hospital::Hospital]),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse)
    ),
    tag = "Hospital"
)]
pub async fn list_hospitals(
    service: web::Data<HospitalService>,
) -> Result<HttpResponse, ServiceError> {
    crud::list(service).await
}

/// Create a new hospital
#[utoipa::path(
    post,
    path = "/api/v1/hospitals/",
    request_body = HospitalInput,
    responses(
        (status = 201, description = "Hospital created", body = crate::model::hospital::Hospital),
        (status = 400, description = "Missing or invalid fields", body = crate::api::MessageResponse, example = json!({
            "message": "hospital_name is required"
        })),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse, example = json!({
            "message": "Error creating hospital"
        }))
    ),
    tag = "Hospital"
)]
pub async fn create_hospital(
    service: web::Data<HospitalService>,
    payload: web::Json<HospitalInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::create(service, payload).await
}

/// Get hospital by ID
#[utoipa::path(
    get,
    path = "/api/v1/hospitals/{hospital_id}",
    params(
        ("hospital_id" = u64, Path, description = "Hospital ID")
    ),
    responses(
        (status = 200, description = "Hospital found", body = crate::model::hospital::Hospital),
        (status = 404, description = "Hospital not found", body = crate::api::MessageResponse, example = json!({
            "message": "Hospital not found"
        }))
    ),
    tag = "Hospital"
)]
pub async fn get_hospital(
    service: web::Data<HospitalService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::get(service, path).await
}

/// Update hospital
#[utoipa::path(
    put,
    path = "/api/v1/hospitals/{hospital_id}",
    params(
        ("hospital_id" = u64, Path, description = "Hospital ID")
    ),
    request_body = HospitalInput,
    responses(
        (status = 200, description = "Hospital updated", body = crate::model::hospital::Hospital),
        (status = 400, description = "Invalid fields", body = crate::api::MessageResponse),
        (status = 404, description = "Hospital not found", body = crate::api::MessageResponse)
    ),
    tag = "Hospital"
)]
pub async fn update_hospital(
    service: web::Data<HospitalService>,
    path: web::Path<u64>,
    payload: web::Json<HospitalInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::update(service, path, payload).await
}

/// Delete hospital
#[utoipa::path(
    delete,
    path = "/api/v1/hospitals/{hospital_id}",
    params(
        ("hospital_id" = u64, Path, description = "Hospital ID")
    ),
    responses(
        (status = 200, description = "Hospital deleted", body = crate::api::MessageResponse, example = json!({
            "message": "Hospital successfully deleted"
        })),
        (status = 404, description = "Hospital not found", body = crate::api::MessageResponse),
        (status = 409, description = "Hospital still referenced", body = crate::api::MessageResponse)
    ),
    tag = "Hospital"
)]
pub async fn delete_hospital(
    service: web::Data<HospitalService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::delete(service, path).await
}
