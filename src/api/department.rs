use actix_web::{HttpResponse, web};

use crate::api::crud;
use crate::model::department::DepartmentInput;
use crate::service::{DepartmentService, ServiceError};

/// Get list of all departments
#[utoipa::path(
    get,
    path = "/api/v1/departments/",
    responses(
        (status = 200, description = "All departments", body = [crate::model::department::Department]),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse)
    ),
    tag = "Department"
)]
pub async fn list_departments(
    service: web::Data<DepartmentService>,
) -> Result<HttpResponse, ServiceError> {
    crud::list(service).await
}

/// Create a new department
#[utoipa::path(
    post,
    path = "/api/v1/departments/",
    request_body = DepartmentInput,
    responses(
        (status = 201, description = "Department created", body = crate::model::department::Department),
        (status = 400, description = "Missing or invalid fields", body = crate::api::MessageResponse, example = json!({
            "message": "department_name is required"
        })),
        (status = 500, description = "Internal server error", body = crate::api::MessageResponse, example = json!({
            "message": "Error creating department"
        }))
    ),
    tag = "Department"
)]
pub async fn create_department(
    service: web::Data<DepartmentService>,
    payload: web::Json<DepartmentInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::create(service, payload).await
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/api/v1/departments/{department_id}",
    params(
        ("department_id" = u64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department found", body = crate::model::department::Department),
        (status = 404, description = "Department not found", body = crate::api::MessageResponse, example = json!({
            "message": "Department not found"
        }))
    ),
    tag = "Department"
)]
pub async fn get_department(
    service: web::Data<DepartmentService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::get(service, path).await
}

/// Update department
#[utoipa::path(
    put,
    path = "/api/v1/departments/{department_id}",
    params(
        ("department_id" = u64, Path, description = "Department ID")
    ),
    request_body = DepartmentInput,
    responses(
        (status = 200, description = "Department updated", body = crate::model::department::Department),
        (status = 400, description = "Invalid fields", body = crate::api::MessageResponse),
        (status = 404, description = "Department not found", body = crate::api::MessageResponse)
    ),
    tag = "Department"
)]
pub async fn update_department(
    service: web::Data<DepartmentService>,
    path: web::Path<u64>,
    payload: web::Json<DepartmentInput>,
) -> Result<HttpResponse, ServiceError> {
    crud::update(service, path, payload).await
}

/// Delete department
#[utoipa::path(
    delete,
    path = "/api/v1/departments/{department_id}",
    params(
        ("department_id" = u64, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Department deleted", body = crate::api::MessageResponse, example = json!({
            "message": "Department successfully deleted"
        })),
        (status = 404, description = "Department not found", body = crate::api::MessageResponse),
        (status = 409, description = "Department still referenced", body = crate::api::MessageResponse)
    ),
    tag = "Department"
)]
pub async fn delete_department(
    service: web::Data<DepartmentService>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    crud::delete(service, path).await
}
