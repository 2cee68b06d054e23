use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::server::{config::Config, error::Error, service::employee::EmployeeService};

/// Build the remote directory client from configuration
pub fn build_directory_client(config: &Config) -> Result<directory_client::Client, Error> {
    let directory_client = directory_client::Client::builder()
        .base_url(&config.directory_api_url)
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    Ok(directory_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Populate the employee cache from the remote directory
///
/// Failures are logged and never prevent the server from starting; the cache simply starts
/// out with whatever it held before.
pub async fn warm_cache(db: &DatabaseConnection, directory_client: &directory_client::Client) {
    let employee_service = EmployeeService::new(db, directory_client);

    match employee_service.get_all_employees().await {
        Ok(employees) => tracing::info!("Warmed employee cache with {} records", employees.len()),
        Err(e) => tracing::warn!("Failed to warm employee cache: {}", e),
    }
}
