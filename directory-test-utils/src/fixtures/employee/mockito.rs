//! Remote directory HTTP mock endpoint creation utilities.
//!
//! Response bodies follow the directory API envelope `{status, data, message}`.

use directory_client::model::{employee::RemoteEmployeeRecord, ApiResponse};
use mockito::Mock;
use serde_json::json;

use crate::{constant::TEST_DELETE_MESSAGE, fixtures::employee::EmployeeFixtures};

impl<'a> EmployeeFixtures<'a> {
    /// Create a mock endpoint at `GET /api/v1/employees` returning the records.
    pub fn create_employees_endpoint(
        &mut self,
        records: Vec<RemoteEmployeeRecord>,
        expected_requests: usize,
    ) -> Mock {
        let body = ApiResponse {
            status: Some("success".to_string()),
            data: Some(records),
            message: Some("Successfully! All records has been fetched.".to_string()),
        };

        self.setup
            .server
            .mock("GET", "/api/v1/employees")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `GET /api/v1/employee/{id}`.
    ///
    /// `None` answers with `"data": null`, the directory's way of saying the employee does
    /// not exist.
    pub fn create_employee_endpoint(
        &mut self,
        id: i32,
        record: Option<RemoteEmployeeRecord>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/api/v1/employee/{}", id);
        let body = ApiResponse {
            status: Some("success".to_string()),
            data: record,
            message: Some("Successfully! Record has been fetched.".to_string()),
        };

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&body).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `POST /api/v1/create` answering with the created record.
    ///
    /// The response uses the creation shape (`name`, `salary`, `age` with string numbers).
    pub fn create_create_employee_endpoint(
        &mut self,
        record: RemoteEmployeeRecord,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "status": "success",
            "data": {
                "name": record.employee_name,
                "salary": record.employee_salary.to_string(),
                "age": record.employee_age.to_string(),
                "id": record.id,
            }
        });

        self.setup
            .server
            .mock("POST", "/api/v1/create")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `DELETE /api/v1/delete/{id}` confirming the deletion.
    pub fn create_delete_employee_endpoint(&mut self, id: i32, expected_requests: usize) -> Mock {
        let url = format!("/api/v1/delete/{}", id);
        let body = json!({
            "status": "success",
            "data": id.to_string(),
            "message": TEST_DELETE_MESSAGE,
        });

        self.setup
            .server
            .mock("DELETE", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint answering `method path` with an error status and no body.
    pub fn create_error_endpoint(
        &mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
