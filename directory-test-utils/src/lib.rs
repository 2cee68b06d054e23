//! Test utilities for the employee directory.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, cached employees and
//! mocked remote directory endpoints, then `build()` returns a [`TestContext`] holding an
//! in-memory SQLite database and a directory client pointed at the mock server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::employee::factory, TestBuilder, TestContext, TestError};
}
