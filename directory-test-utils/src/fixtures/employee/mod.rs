//! Employee fixtures.
//!
//! - `factory` - remote directory records, including the 13 employee reference set
//! - `data` - rows inserted directly into the employee cache
//! - `mockito` - mock remote directory endpoints

pub mod data;
pub mod factory;
pub mod mockito;

use crate::TestContext;

/// Fixture helpers borrowing the test context
pub struct EmployeeFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}
