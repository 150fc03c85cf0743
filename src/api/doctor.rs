use actix_web::{HttpResponse, web};

use crate::api::crud;
use crate::model::doctor::DoctorInput;
use crate::service::{DoctorService, ServiceError};

/// Get list of all doctors
#[utoipa::path(
    get,
    path = "/api/v1/doctors/",
    responses(
        (status = 200, description = "All doctors", body = [crate::model::doctor::Doctor]),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse)
    ),
    tag = "Doctor"
)]
pub async fn list_doctors(
    service: web::Data<DoctorService>,
) -> Result<HttpResponse, ServiceError> {
    crud::list(service).await
}

/// Create a new doctor
#[utoipa::path(
    post,
    path = "/api/v1/doctors/",
    request_body = DoctorInput,
    responses(
        (status = 201, description = "Doctor created", body = crate::model::doctor::Doctor),
        (status = 400, description = "Missing or invalid fields", body = crate::api::MessageResponse, example = json!({
            "message": "doctor_name is required"
        })),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse, example = json!({
            "message": "Error creating doctor"
        }))
    ),
    tag = "Doctor"
)]
pub async fn create_doctor(
    service: web::Data<DoctorService>,
    payload: web::Json<DoctorInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::create(service, payload).await
}

/// Get doctor by ID
#[utoipa::path(
    get,
    path = "/api/v1/doctors/{doctor_id}",
    params(
        ("doctor_id" = u64, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor found", body = crate::model::doctor::Doctor),
        (status = 404, description = "Doctor not found", body = crate::api::MessageResponse, example = json!({
            "message": "Doctor not found"
        }))
    ),
    tag = "Doctor"
)]
pub async fn get_doctor(
    service: web::Data<DoctorService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::get(service, path).await
}

/// Update doctor
#[utoipa::path(
    put,
    path = "/api/v1/doctors/{doctor_id}",
    params(
        ("doctor_id" = u64, Path, description = "Doctor ID")
    ),
    request_body = DoctorInput,
    responses(
        (status = 200, description = "Doctor updated", body = crate::model::doctor::Doctor),
        (status = 400, description = "Invalid fields", body = crate::api::MessageResponse),
        (status = 404, description = "Doctor not found", body = crate::api::MessageResponse)
    ),
    tag = "Doctor"
)]
pub async fn update_doctor(
    service: web::Data<DoctorService>,
    path: web::Path<u64>,
    payload: web::Json<DoctorInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::update(service, path, payload).await
}

/// Delete doctor
#[utoipa::path(
    delete,
    path = "/api/v1/doctors/{doctor_id}",
    params(
        ("doctor_id" = u64, Path, description = "Doctor ID")
    ),
    responses(
        (status = 200, description = "Doctor deleted", body = crate::api::MessageResponse, example = json!({
            "message": "Doctor successfully deleted"
        })),
        (status = 404, description = "Doctor not found", body = crate::api::MessageResponse),
        (status = 409, description = "Doctor still referenced", body = crate::api::MessageResponse)
    ),
    tag = "Doctor"
)]
pub async fn delete_doctor(
    service: web::Data<DoctorService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::delete(service, path).await
}
