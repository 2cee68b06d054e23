//! Error types for the employee directory server.
//!
//! Domain errors (missing data, invalid input) and configuration errors have their own enums;
//! everything is aggregated into [`Error`], which the `?` operator converts into and which
//! implements `IntoResponse` for Axum handlers. [`fallback`] classifies errors into the
//! fallback decision used on read paths.

pub mod config;
pub mod directory;
pub mod fallback;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, directory::DirectoryError},
};

/// Main error type for the employee directory server.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Directory errors (data not found, input validation)
/// - Remote directory client errors (HTTP status, transport, decoding)
/// - Database errors from the employee cache
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Domain error (no data, invalid identifier or creation input).
    #[error(transparent)]
    DirectoryError(#[from] DirectoryError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Remote directory client error (non-success status, connection failure, bad body).
    #[error(transparent)]
    DirectoryClientError(#[from] directory_client::Error),
    /// Database error (query failures, connection issues, missing tables).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Invalid identifier or creation input
/// - 404 Not Found - No employee data available
/// - 429 Too Many Requests - Remote directory rate limited a write
/// - 502 Bad Gateway - Remote directory answered with any other error status
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::DirectoryError(err) => err.into_response(),
            Self::DirectoryClientError(directory_client::Error::ReqwestError(e))
                if e.status().is_some() =>
            {
                upstream_status_response(e)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Maps an error status returned by the remote directory to a gateway response.
fn upstream_status_response(err: reqwest::Error) -> Response {
    tracing::warn!("Remote directory request failed: {}", err);

    match err.status() {
        Some(StatusCode::TOO_MANY_REQUESTS) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorDto {
                error: "Employee directory is rate limiting requests, please retry later"
                    .to_string(),
            }),
        )
            .into_response(),
        _ => (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto {
                error: "Employee directory is unavailable".to_string(),
            }),
        )
            .into_response(),
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
