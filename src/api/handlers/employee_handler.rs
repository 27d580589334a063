//! Employee read handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::ValidatedQuery;
use crate::api::AppState;
use crate::domain::{BasicEmployeeInformation, EmployeeDetail};
use crate::errors::AppResult;
use crate::types::{Page, PaginationParams};

/// Create employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/basic-information-list", get(list_basic_information))
        .route("/basic-information-pagination", get(paginate_basic_information))
        .route("/details", get(list_details))
}

/// List the contact columns of every employee
#[utoipa::path(
    get,
    path = "/api/v1/employees/basic-information-list",
    tag = "Employees",
    responses(
        (status = 200, description = "Basic information of every employee", body = Vec<BasicEmployeeInformation>),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_basic_information(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BasicEmployeeInformation>>> {
    let rows = state
        .employee_service
        .find_employees_basic_information()
        .await?;
    Ok(Json(rows))
}

/// Page through the contact columns of every employee
#[utoipa::path(
    get,
    path = "/api/v1/employees/basic-information-pagination",
    tag = "Employees",
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of basic employee information", body = BasicEmployeeInformationPage),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 500, description = "Database error")
    )
)]
pub async fn paginate_basic_information(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<PaginationParams>,
) -> AppResult<Json<Page<BasicEmployeeInformation>>> {
    let request = params.page_request()?;
    let page = state
        .employee_service
        .find_employees_basic_information_page(request)
        .await?;
    Ok(Json(page))
}

/// List every employee assigned to a department, with the department
#[utoipa::path(
    get,
    path = "/api/v1/employees/details",
    tag = "Employees",
    responses(
        (status = 200, description = "Employee/department detail rows", body = Vec<EmployeeDetail>),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_details(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeDetail>>> {
    let rows = state.employee_service.find_all_employee_details().await?;
    Ok(Json(rows))
}
