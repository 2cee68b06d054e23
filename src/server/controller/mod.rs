//! HTTP request handlers.
//!
//! Handlers extract request data, call into the service layer and return `Result<_, Error>`,
//! leaving status code mapping of failures to `Error`'s `IntoResponse` implementation.

pub mod employee;
