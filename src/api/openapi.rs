//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration.

use utoipa::OpenApi;

use crate::api::handlers::employee_handler;
use crate::domain::{BasicEmployeeInformation, ContractType, EmployeeDetail};
use crate::types::BasicEmployeeInformationPage;

/// OpenAPI documentation for the Employee API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee API",
        version = "0.1.0",
        description = "Read-only employee directory backed by SeaORM projections",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        employee_handler::list_basic_information,
        employee_handler::paginate_basic_information,
        employee_handler::list_details,
    ),
    components(
        schemas(
            BasicEmployeeInformation,
            BasicEmployeeInformationPage,
            EmployeeDetail,
            ContractType,
        )
    ),
    tags(
        (name = "Employees", description = "Employee read models")
    )
)]
pub struct ApiDoc;
