//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI
//! is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/employee` - All employees
/// - `POST /api/employee` - Create an employee
/// - `GET /api/employee/search/{search}` - Employees by name substring
/// - `GET /api/employee/highestSalary` - Highest salary
/// - `GET /api/employee/topTenHighestEarningEmployeeNames` - Ten best paid names
/// - `GET /api/employee/{id}` - Single employee
/// - `DELETE /api/employee/{id}` - Delete an employee
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Employee Directory", description = "Employee Directory API"), tags(
        (name = controller::employee::EMPLOYEE_TAG, description = "Employee directory API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::employee::get_all_employees,
            controller::employee::create_employee
        ))
        .routes(routes!(controller::employee::search_employees_by_name))
        .routes(routes!(controller::employee::get_highest_salary))
        .routes(routes!(
            controller::employee::get_top_ten_highest_earning_employee_names
        ))
        .routes(routes!(
            controller::employee::get_employee_by_id,
            controller::employee::delete_employee_by_id
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
