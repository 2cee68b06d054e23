//! Tests for EmployeeService::delete_employee_by_id method.
//!
//! Verifies that the remote confirmation message is passed through unchanged, that the cache
//! entry is removed when present, and that remote failures are never masked by the cache.

use directory_test_utils::constant::TEST_DELETE_MESSAGE;

use super::*;

/// Tests deleting a cached employee.
///
/// Expected: Ok with the remote message, cache entry removed
#[tokio::test]
async fn deletes_employee_and_removes_cache_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_cached_employee(2, "Suraj", 5500, 26)
        .with_cached_employee(3, "Rajesh", 4100, 22)
        .with_delete_employee_endpoint(2, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let message = employee_service.delete_employee_by_id("2").await.unwrap();

    assert_eq!(message, TEST_DELETE_MESSAGE);
    assert_eq!(cached_ids(&test).await?, vec![3]);

    test.assert_mocks();

    Ok(())
}

/// Tests deleting an employee that was never cached.
///
/// Expected: Ok with the remote message
#[tokio::test]
async fn succeeds_on_cache_miss() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_delete_employee_endpoint(2, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let message = employee_service.delete_employee_by_id("2").await.unwrap();

    assert_eq!(message, TEST_DELETE_MESSAGE);

    test.assert_mocks();

    Ok(())
}

/// Tests a remote success that carries no confirmation message.
///
/// Verifies that any success status counts as a deletion, so the cache entry is removed.
///
/// Expected: Ok with an empty message, cache entry removed
#[tokio::test]
async fn removes_cache_entry_when_remote_sends_no_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_cached_employee(2, "Suraj", 5500, 26)
        .with_cached_employee(3, "Rajesh", 4100, 22)
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/api/v1/delete/2")
                .with_status(200)
                .with_body(r#"{"status":"success","data":"2"}"#)
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let message = employee_service.delete_employee_by_id("2").await.unwrap();

    assert_eq!(message, "");
    assert_eq!(cached_ids(&test).await?, vec![3]);

    test.assert_mocks();

    Ok(())
}

/// Tests a remote success with an empty body.
///
/// Expected: Ok with an empty message, cache entry removed
#[tokio::test]
async fn removes_cache_entry_when_remote_body_is_empty() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_cached_employee(2, "Suraj", 5500, 26)
        .with_mock_endpoint(|server| {
            server
                .mock("DELETE", "/api/v1/delete/2")
                .with_status(200)
                .with_body("")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let message = employee_service.delete_employee_by_id("2").await.unwrap();

    assert_eq!(message, "");
    assert!(cached_ids(&test).await?.is_empty());

    test.assert_mocks();

    Ok(())
}

/// Tests rate limiting on deletion.
///
/// Verifies that deletion has no fallback and the cached employee is kept.
///
/// Expected: Err(DirectoryClientError), cache unchanged
#[tokio::test]
async fn propagates_rate_limit_and_keeps_cache() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_cached_employee(2, "Suraj", 5500, 26)
        .with_error_endpoint("DELETE", "/api/v1/delete/2", 429, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.delete_employee_by_id("2").await;

    assert!(matches!(result, Err(Error::DirectoryClientError(_))));
    assert_eq!(cached_ids(&test).await?, vec![2]);

    test.assert_mocks();

    Ok(())
}

/// Tests a server error on deletion.
///
/// Expected: Err(DirectoryClientError)
#[tokio::test]
async fn propagates_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_error_endpoint("DELETE", "/api/v1/delete/2", 500, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.delete_employee_by_id("2").await;

    assert!(matches!(result, Err(Error::DirectoryClientError(_))));

    test.assert_mocks();

    Ok(())
}

/// Tests an empty identifier.
///
/// Expected: Err(InvalidArgument)
#[tokio::test]
async fn fails_for_empty_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_employee_tables().build().await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.delete_employee_by_id("").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::InvalidArgument(_)))
    ));

    Ok(())
}

/// Tests a non-numeric identifier.
///
/// Expected: Err(InvalidNumericFormat)
#[tokio::test]
async fn fails_for_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_employee_tables().build().await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.delete_employee_by_id("abc").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::InvalidNumericFormat(_)))
    ));

    Ok(())
}
