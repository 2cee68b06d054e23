use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{api::ErrorDto, employee::Employee},
    server::{error::Error, model::app::AppState, service::employee::EmployeeService},
};

pub static EMPLOYEE_TAG: &str = "employee";

/// Get all employees
///
/// Served from the cache when the remote directory is rate limiting or failing.
#[utoipa::path(
    get,
    path = "/api/employee",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Success when retrieving employees", body = Vec<Employee>),
        (status = 404, description = "Remote directory returned no employees", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_employees(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let employees = employee_service.get_all_employees().await?;

    Ok((StatusCode::OK, Json(employees)))
}

/// Get employees whose name contains the search string, ignoring case
#[utoipa::path(
    get,
    path = "/api/employee/search/{search}",
    tag = EMPLOYEE_TAG,
    params(
        ("search" = String, Path, description = "Substring to look for in employee names")
    ),
    responses(
        (status = 200, description = "Matching employees, possibly none", body = Vec<Employee>),
        (status = 404, description = "Remote directory returned no employees", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_employees_by_name(
    State(state): State<AppState>,
    Path(search): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let employees = employee_service.search_employees_by_name(&search).await?;

    Ok((StatusCode::OK, Json(employees)))
}

/// Get the highest salary across all employees
#[utoipa::path(
    get,
    path = "/api/employee/highestSalary",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Highest employee salary", body = i32),
        (status = 404, description = "No employees available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_highest_salary(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let salary = employee_service.get_highest_salary().await?;

    Ok((StatusCode::OK, Json(salary)))
}

/// Get the names of the ten highest earning employees
#[utoipa::path(
    get,
    path = "/api/employee/topTenHighestEarningEmployeeNames",
    tag = EMPLOYEE_TAG,
    responses(
        (status = 200, description = "Names ordered by salary, highest first", body = Vec<String>),
        (status = 404, description = "Remote directory returned no employees", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_ten_highest_earning_employee_names(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let names = employee_service
        .get_top_ten_highest_earning_employee_names()
        .await?;

    Ok((StatusCode::OK, Json(names)))
}

/// Get a single employee
#[utoipa::path(
    get,
    path = "/api/employee/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Success when retrieving employee", body = Employee),
        (status = 400, description = "Identifier is not a valid integer", body = ErrorDto),
        (status = 404, description = "Employee not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let employee = employee_service.get_employee_by_id(&id).await?;

    Ok((StatusCode::OK, Json(employee)))
}

/// Create an employee
///
/// Requires `name`, `salary` and `age`; the body is forwarded to the remote directory as-is.
#[utoipa::path(
    post,
    path = "/api/employee",
    tag = EMPLOYEE_TAG,
    request_body(content = Object, description = "Employee fields, e.g. {\"name\": \"test\", \"salary\": \"123\", \"age\": \"23\"}"),
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Missing or invalid employee fields", body = ErrorDto),
        (status = 429, description = "Remote directory is rate limiting requests", body = ErrorDto),
        (status = 502, description = "Remote directory failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<Map<String, Value>>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let employee = employee_service.create_employee(input).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Delete an employee
///
/// Returns the remote directory's confirmation message unchanged.
#[utoipa::path(
    delete,
    path = "/api/employee/{id}",
    tag = EMPLOYEE_TAG,
    params(
        ("id" = String, Path, description = "Employee identifier")
    ),
    responses(
        (status = 200, description = "Confirmation message from the remote directory", body = String),
        (status = 400, description = "Identifier is not a valid integer", body = ErrorDto),
        (status = 429, description = "Remote directory is rate limiting requests", body = ErrorDto),
        (status = 502, description = "Remote directory failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_employee_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let employee_service = EmployeeService::new(&state.db, &state.directory_client);

    let message = employee_service.delete_employee_by_id(&id).await?;

    Ok((StatusCode::OK, Json(message)))
}
