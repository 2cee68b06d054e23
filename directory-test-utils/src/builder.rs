//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are created
//! during the final `build()` call.

use directory_client::model::employee::RemoteEmployeeRecord;
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,

    // Cache rows to insert (id, name, salary, age)
    cached_employees: Vec<(i32, String, i32, i32)>,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    employees_endpoints: Vec<(Vec<RemoteEmployeeRecord>, usize)>,
    employee_endpoints: Vec<(i32, Option<RemoteEmployeeRecord>, usize)>,
    create_employee_endpoints: Vec<(RemoteEmployeeRecord, usize)>,
    delete_employee_endpoints: Vec<(i32, usize)>,
    error_endpoints: Vec<(String, String, usize, usize)>, // (method, path, status, expected)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            cached_employees: Vec::new(),
            mock_builders: Vec::new(),
            employees_endpoints: Vec::new(),
            employee_endpoints: Vec::new(),
            create_employee_endpoints: Vec::new(),
            delete_employee_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
        }
    }

    /// Add the employee cache table to the test database.
    pub fn with_employee_tables(self) -> Self {
        self.with_table(entity::prelude::EmployeeDetails)
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use directory_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), directory_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(EmployeeDetails)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert an employee into the cache table.
    ///
    /// Only creates the database row, no mock endpoint is set up.
    pub fn with_cached_employee(mut self, id: i32, name: &str, salary: i32, age: i32) -> Self {
        self.cached_employees
            .push((id, name.to_string(), salary, age));
        self
    }

    /// Add a mock `GET /api/v1/employees` endpoint returning `records`.
    ///
    /// # Arguments
    /// - `records` - Records to return, may be empty
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_employees_endpoint(
        mut self,
        records: Vec<RemoteEmployeeRecord>,
        expected_requests: usize,
    ) -> Self {
        self.employees_endpoints.push((records, expected_requests));
        self
    }

    /// Add a mock `GET /api/v1/employee/{id}` endpoint.
    ///
    /// A `None` record answers successfully without data.
    pub fn with_employee_endpoint(
        mut self,
        id: i32,
        record: Option<RemoteEmployeeRecord>,
        expected_requests: usize,
    ) -> Self {
        self.employee_endpoints
            .push((id, record, expected_requests));
        self
    }

    /// Add a mock `POST /api/v1/create` endpoint answering with `record`.
    pub fn with_create_employee_endpoint(
        mut self,
        record: RemoteEmployeeRecord,
        expected_requests: usize,
    ) -> Self {
        self.create_employee_endpoints
            .push((record, expected_requests));
        self
    }

    /// Add a mock `DELETE /api/v1/delete/{id}` endpoint confirming the deletion.
    pub fn with_delete_employee_endpoint(mut self, id: i32, expected_requests: usize) -> Self {
        self.delete_employee_endpoints.push((id, expected_requests));
        self
    }

    /// Add a mock endpoint that answers with an error status.
    ///
    /// # Arguments
    /// - `method` - HTTP method, e.g. `"GET"`
    /// - `path` - Request path, e.g. `"/api/v1/employees"`
    /// - `status` - Status code to answer with, e.g. `429`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_error_endpoint(
        mut self,
        method: &str,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.error_endpoints.push((
            method.to_string(),
            path.to_string(),
            status,
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts cached employees
    /// 3. Creates mock HTTP endpoints (custom endpoints first)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::DirectoryClientError)` - Directory client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for (id, name, salary, age) in self.cached_employees {
            setup
                .employee()
                .insert_cached_employee(id, &name, salary, age)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can register several mocks for the same
        // path and rely on mockito matching them in order
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (records, expected) in self.employees_endpoints {
            mocks.push(setup.employee().create_employees_endpoint(records, expected));
        }

        for (id, record, expected) in self.employee_endpoints {
            mocks.push(setup.employee().create_employee_endpoint(id, record, expected));
        }

        for (record, expected) in self.create_employee_endpoints {
            mocks.push(
                setup
                    .employee()
                    .create_create_employee_endpoint(record, expected),
            );
        }

        for (id, expected) in self.delete_employee_endpoints {
            mocks.push(setup.employee().create_delete_employee_endpoint(id, expected));
        }

        for (method, path, status, expected) in self.error_endpoints {
            mocks.push(
                setup
                    .employee()
                    .create_error_endpoint(&method, &path, status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
