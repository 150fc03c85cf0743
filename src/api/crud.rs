//! Request handling shared by every resource; the per-resource modules only
//! add routing docs and concrete types.

use actix_web::{HttpResponse, web};

use crate::api::MessageResponse;
use crate::model::Resource;
use crate::service::{ResourceService, ServiceError};

pub async fn list<R: Resource>(
    service: web::Data<ResourceService<R>>,
) -> Result<HttpResponse, ServiceError> {
    let records = service.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

pub async fn create<R: Resource>(
    service: web::Data<ResourceService<R>>,
    payload: web::Json<R::Input>,
) -> Result<HttpResponse, ServiceError> {
    let record = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(record))
}

pub async fn get<R: Resource>(
    service: web::Data<ResourceService<R>>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    let record = service.get(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn update<R: Resource>(
    service: web::Data<ResourceService<R>>,
    path: web::Path<u64>,
    payload: web::Json<R::Input>,
) -> Result<HttpResponse, ServiceError> {
    let record = service.update(path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub async fn delete<R: Resource>(
    service: web::Data<ResourceService<R>>,
    path: web::Path<u64>,
) -> Result<HttpResponse, ServiceError> {
    service.delete(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "{} successfully deleted",
        R::NAME
    ))))
}
