//! Tests for EmployeeService.
//!
//! Covers the remote-first read paths with their cache population and fallback, the
//! aggregations built on the employee list, and the remote-only create and delete paths.

mod delete_employee_by_id;
mod get_employee_by_id;

use directory_test_utils::prelude::*;
use employee_directory::server::{
    error::{directory::DirectoryError, Error},
    service::employee::EmployeeService,
};
use sea_orm::EntityTrait;

/// Ids currently held in the employee cache, ascending
async fn cached_ids(test: &TestContext) -> Result<Vec<i32>, TestError> {
    let mut ids: Vec<i32> = entity::prelude::EmployeeDetails::find()
        .all(&test.db)
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();
    ids.sort();

    Ok(ids)
}
