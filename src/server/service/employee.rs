use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::{
    model::employee::Employee,
    server::{
        data::employee::EmployeeRepository,
        error::{directory::DirectoryError, Error},
        service::{
            aggregation::{self, TOP_EARNERS_LIMIT},
            fallback::FallbackContext,
            validation,
        },
    },
};

/// Employee directory operations backed by the remote directory with a local cache.
///
/// Reads go to the remote directory first and populate the cache on success; when the remote
/// fails with a client or server error status the cached copy is served instead. Creation and
/// deletion always require the remote directory to succeed.
pub struct EmployeeService<'a> {
    db: &'a DatabaseConnection,
    directory_client: &'a directory_client::Client,
}

impl<'a> EmployeeService<'a> {
    /// Creates a new instance of [`EmployeeService`]
    pub fn new(db: &'a DatabaseConnection, directory_client: &'a directory_client::Client) -> Self {
        Self {
            db,
            directory_client,
        }
    }

    /// Fetch all employees
    ///
    /// # Returns
    /// - `Ok(Vec<Employee>)`: Employees from the remote directory, or from the cache (possibly
    ///   empty) when the remote directory failed transiently
    /// - `Err(Error::DirectoryError(DataNotFound))`: The remote directory returned no employees
    /// - `Err(Error)`: Any other remote or cache failure
    pub async fn get_all_employees(&self) -> Result<Vec<Employee>, Error> {
        tracing::info!("Fetching all employees");

        FallbackContext::new("employee list fetch")
            .execute(self.fetch_all_from_remote(), || self.fetch_all_from_cache())
            .await
    }

    /// Fetch all employees whose name contains `search`, ignoring case
    pub async fn search_employees_by_name(&self, search: &str) -> Result<Vec<Employee>, Error> {
        let employees = self.get_all_employees().await?;

        tracing::info!("Filtering employee names by search string {:?}", search);

        Ok(aggregation::filter_by_name(employees, search))
    }

    /// Highest salary across all employees
    pub async fn get_highest_salary(&self) -> Result<i32, Error> {
        let employees = self.get_all_employees().await?;

        Ok(aggregation::highest_salary(&employees)?)
    }

    /// Names of the ten best paid employees, highest salary first
    pub async fn get_top_ten_highest_earning_employee_names(&self) -> Result<Vec<String>, Error> {
        let employees = self.get_all_employees().await?;

        Ok(aggregation::top_earner_names(&employees, TOP_EARNERS_LIMIT))
    }

    /// Fetch a single employee
    ///
    /// # Arguments
    /// - `id`: Employee identifier as received, validated before any request is made
    pub async fn get_employee_by_id(&self, id: &str) -> Result<Employee, Error> {
        let id = validation::parse_employee_id(id)?;

        tracing::info!("Fetching employee details for id {}", id);

        FallbackContext::new("employee lookup")
            .execute(self.fetch_one_from_remote(id), || self.fetch_one_from_cache(id))
            .await
    }

    /// Create an employee in the remote directory and cache the result
    ///
    /// The input is validated and then forwarded to the remote directory unchanged. There is
    /// no cache fallback, any remote failure is returned.
    pub async fn create_employee(&self, input: Map<String, Value>) -> Result<Employee, Error> {
        validation::validate_creation_input(&input)?;

        tracing::info!("Creating employee {}", input.get("name").unwrap_or(&serde_json::Value::Null));

        let record = self
            .directory_client
            .employee()
            .create_employee(&input)
            .await?;
        let employee = Employee::from(record);

        let repo = EmployeeRepository::new(self.db);
        if let Err(e) = repo.upsert(employee.clone()).await {
            tracing::error!("Failed to cache created employee {}: {}", employee.id, e);
        }

        Ok(employee)
    }

    /// Delete an employee from the remote directory and then from the cache
    ///
    /// Returns the remote directory's confirmation message unchanged, or an empty string when
    /// it sent none. Any success status removes the cached entry. There is no cache fallback,
    /// any remote failure is returned and the cache is left untouched.
    pub async fn delete_employee_by_id(&self, id: &str) -> Result<String, Error> {
        let id = validation::parse_employee_id(id)?;

        let message = self
            .directory_client
            .employee()
            .delete_employee(id)
            .await?
            .unwrap_or_default();

        tracing::info!("Deleted employee {} from remote directory: {:?}", id, message);

        let repo = EmployeeRepository::new(self.db);
        match repo.delete_by_id(id).await {
            Ok(result) if result.rows_affected == 0 => {
                tracing::info!("Employee {} was not present in cache", id)
            }
            Ok(_) => tracing::debug!("Removed employee {} from cache", id),
            Err(e) => tracing::error!("Failed to remove employee {} from cache: {}", id, e),
        }

        Ok(message)
    }

    async fn fetch_all_from_remote(&self) -> Result<Vec<Employee>, Error> {
        let records = self.directory_client.employee().get_all_employees().await?;

        if records.is_empty() {
            tracing::warn!("Remote directory returned no employees");
            return Err(DirectoryError::DataNotFound.into());
        }

        let employees: Vec<Employee> = records.into_iter().map(Employee::from).collect();

        let repo = EmployeeRepository::new(self.db);
        if let Err(e) = repo.upsert_many(employees.clone()).await {
            tracing::error!("Failed to cache {} employees: {}", employees.len(), e);
        }

        Ok(employees)
    }

    async fn fetch_all_from_cache(&self) -> Result<Vec<Employee>, Error> {
        let repo = EmployeeRepository::new(self.db);
        let cached = repo.find_all().await?;

        tracing::info!("Serving {} employees from cache", cached.len());

        Ok(cached.into_iter().map(Employee::from).collect())
    }

    async fn fetch_one_from_remote(&self, id: i32) -> Result<Employee, Error> {
        let Some(record) = self.directory_client.employee().get_employee(id).await? else {
            tracing::warn!("Remote directory has no employee with id {}", id);
            return Err(DirectoryError::DataNotFound.into());
        };

        let employee = Employee::from(record);

        let repo = EmployeeRepository::new(self.db);
        if let Err(e) = repo.upsert(employee.clone()).await {
            tracing::error!("Failed to cache employee {}: {}", id, e);
        }

        Ok(employee)
    }

    async fn fetch_one_from_cache(&self, id: i32) -> Result<Employee, Error> {
        let repo = EmployeeRepository::new(self.db);

        match repo.find_by_id(id).await? {
            Some(cached) => {
                tracing::info!("Serving employee {} from cache", id);
                Ok(Employee::from(cached))
            }
            None => {
                tracing::debug!("Employee {} not found in cache", id);
                Err(DirectoryError::DataNotFound.into())
            }
        }
    }
}
