use crate::{
    api::{department, doctor, error::json_config, hospital, patient},
    config::Config,
    service::Services,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, Responder, get, middleware::Condition, web};
use serde_json::json;

#[get("/")]
async fn index() -> impl Responder {
    "Hospital Management API"
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Per-peer-IP limiter; a zero rate is treated as one request per minute.
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .unwrap_or_default();
    Governor::new(&cfg)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, services: &Services) {
    let limiter = build_limiter(config.rate_limit_per_min);
    let limit_enabled = config.rate_limit_per_min > 0;

    cfg.app_data(json_config())
        .app_data(services.hospitals.clone())
        .app_data(services.departments.clone())
        .app_data(services.doctors.clone())
        .app_data(services.patients.clone())
        .service(index)
        .service(health);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Condition::new(limit_enabled, limiter))
            .service(
                web::scope("/hospitals")
                    // /hospitals
                    .service(
                        web::resource("")
                            .route(web::get().to(hospital::list_hospitals))
                            .route(web::post().to(hospital::create_hospital)),
                    )
                    // /hospitals/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(hospital::get_hospital))
                            .route(web::put().to(hospital::update_hospital))
                            .route(web::delete().to(hospital::delete_hospital)),
                    ),
            )
            .service(
                web::scope("/departments")
                    // /departments
                    .service(
                        web::resource("")
                            .route(web::get().to(department::list_departments))
                            .route(web::post().to(department::create_department)),
                    )
                    // /departments/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(department::get_department))
                            .route(web::put().to(department::update_department))
                            .route(web::delete().to(department::delete_department)),
                    ),
            )
            .service(
                web::scope("/doctors")
                    // /doctors
                    .service(
                        web::resource("")
                            .route(web::get().to(doctor::list_doctors))
                            .route(web::post().to(doctor::create_doctor)),
                    )
                    // /doctors/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(doctor::get_doctor))
                            .route(web::put().to(doctor::update_doctor))
                            .route(web::delete().to(doctor::delete_doctor)),
                    ),
            )
            .service(
                web::scope("/patients")
                    // /patients
                    .service(
                        web::resource("")
                            .route(web::get().to(patient::list_patients))
                            .route(web::post().to(patient::create_patient)),
                    )
                    // /patients/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(patient::get_patient))
                            .route(web::put().to(patient::update_patient))
                            .route(web::delete().to(patient::delete_patient)),
                    ),
            ),
    );
}
