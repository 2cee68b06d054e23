use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors of the employee directory.
///
/// None of these are ever retried or answered from the cache.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DirectoryError {
    /// The directory answered authoritatively with no data, or the cache had nothing to
    /// fall back on.
    #[error("Data Not Found")]
    DataNotFound,
    /// Input was empty or out of range.
    #[error("{0}")]
    InvalidArgument(String),
    /// Creation input was missing one of `name`, `salary` or `age`.
    #[error("Incomplete data provided, please provide name, age, salary")]
    IncompleteData,
    /// A numeric field could not be parsed as an integer.
    #[error("{0}")]
    InvalidNumericFormat(String),
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DataNotFound => StatusCode::NOT_FOUND,
            Self::InvalidArgument(_) | Self::IncompleteData | Self::InvalidNumericFormat(_) => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
