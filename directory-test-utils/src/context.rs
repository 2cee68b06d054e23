//! Test context structure and utilities.
//!
//! The context is returned by `TestBuilder::build()` and holds an in-memory SQLite database,
//! the mock remote directory server and a directory client configured to use it.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_USER_AGENT, error::TestError, fixtures::employee::EmployeeFixtures};

/// Test context structure returned by `TestBuilder`
///
/// ```ignore
/// let test = TestBuilder::new().with_employee_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access the directory client
/// let client = &test.directory_client;
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// Directory client configured to use mock server
    pub directory_client: directory_client::Client,

    /// Mock HTTP server standing in for the remote directory
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert database and directory client into any type that can be constructed from them
    ///
    /// Allows building the server's `AppState` without test-utils depending on the server
    /// crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, directory_client::Client)>,
    {
        T::from((self.db.clone(), self.directory_client.clone()))
    }

    /// Access employee fixture helpers
    pub fn employee(&mut self) -> EmployeeFixtures<'_> {
        EmployeeFixtures { setup: self }
    }

    /// URL of the mock remote directory
    pub fn server_url(&self) -> String {
        self.server.url()
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DirectoryClientError)` - Directory client could not be built
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;

        let directory_client = directory_client::Client::builder()
            .base_url(&mock_server.url())
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            directory_client,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
