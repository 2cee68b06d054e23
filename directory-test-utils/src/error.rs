use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DirectoryClientError(#[from] directory_client::Error),
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
