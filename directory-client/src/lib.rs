//! Client for the remote employee directory REST API.
//!
//! The client issues exactly one HTTP request per logical operation and returns either the
//! decoded record(s) or an [`Error`]. Non-2xx responses are surfaced as
//! [`Error::ReqwestError`] carrying the HTTP status so callers can classify the failure.
//!
//! ```no_run
//! # async fn example() -> Result<(), directory_client::Error> {
//! let client = directory_client::Client::builder()
//!     .base_url("https://dummy.restapiexample.com/")
//!     .user_agent("employee-directory/0.1")
//!     .build()?;
//!
//! let employees = client.employee().get_all_employees().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub mod endpoints;
pub mod model;

pub use client::{Client, ClientBuilder};
pub use error::Error;
