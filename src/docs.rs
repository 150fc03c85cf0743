use crate::api::MessageResponse;
use crate::model::department::{Department, DepartmentInput};
use crate::model::doctor::{Doctor, DoctorInput};
use crate::model::hospital::{Hospital, HospitalInput};
use crate::model::patient::{Patient, PatientInput};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital Management API",
        version = "1.0.0",
        description = r#"
## Hospital Management System

CRUD backend for the core records of a hospital network.

### 🔹 Resources
- **Hospitals**: name and address
- **Departments**: belong to a hospital
- **Doctors**: belong to a department, optional specialization
- **Patients**: optional birth date and attending doctor

### 📦 Response Format
- JSON records with stable snake_case field names
- Errors are `{"message": "..."}` with 400 / 404 / 409 / 500

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::hospital::list_hospitals,
        crate::api::hospital::create_hospital,
        crate::api::hospital::get_hospital,
        crate::api::hospital::update_hospital,
        crate::api::hospital::delete_hospital,

        crate::api::department::list_departments,
        crate::api::department::create_department,
        crate::api::department::get_department,
        crate::api::department::update_department,
        crate::api::department::delete_department,

        crate::api::doctor::list_doctors,
        crate::api::doctor::create_doctor,
        crate::api::doctor::get_doctor,
        crate::api::doctor::update_doctor,
        crate::api::doctor::delete_doctor,

        crate::api::patient::list_patients,
        crate::api::patient::create_patient,
        crate::api::patient::get_patient,
        crate::api::patient::update_patient,
        crate::api::patient::delete_patient
    ),
    components(
        schemas(
            Hospital,
            HospitalInput,
            Department,
            DepartmentInput,
            Doctor,
            DoctorInput,
            Patient,
            PatientInput,
            MessageResponse
        )
    ),
    tags(
        (name = "Hospital", description = "Hospital management APIs"),
        (name = "Department", description = "Department management APIs"),
        (name = "Doctor", description = "Doctor management APIs"),
        (name = "Patient", description = "Patient management APIs"),
    )
)]
pub struct ApiDoc;
