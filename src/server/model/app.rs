use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub directory_client: directory_client::Client,
}

impl From<(DatabaseConnection, directory_client::Client)> for AppState {
    fn from((db, directory_client): (DatabaseConnection, directory_client::Client)) -> Self {
        Self {
            db,
            directory_client,
        }
    }
}
