//! OpenAPI documentation for the employee records API.
//!
//! The generated document is served interactively at `/docs`.

use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "staffctl API",
        description = "Employee records service: CRUD over employee records plus a rendered homepage."
    ),
    paths(
        api::handlers::employees::list_employees,
        api::handlers::employees::create_employee,
        api::handlers::employees::get_employee,
        api::handlers::employees::update_employee,
        api::handlers::employees::delete_employee,
    ),
    components(schemas(
        api::models::employees::EmployeeCreate,
        api::models::employees::EmployeeUpdate,
        api::models::employees::EmployeeResponse,
    )),
    tags(
        (name = "employees", description = "Employee record management")
    )
)]
pub struct ApiDoc;
