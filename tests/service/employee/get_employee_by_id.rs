//! Tests for EmployeeService::get_employee_by_id method.
//!
//! Verifies identifier validation, caching of remote lookups, the fallback to the cache on
//! client/server error statuses, and DataNotFound for missing employees.

use super::*;

/// Tests fetching an existing employee.
///
/// Expected: Ok with the employee, which is now cached
#[tokio::test]
async fn returns_remote_employee_and_caches_it() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_employee_endpoint(
            6,
            Some(factory::mock_employee_record(6, "Pavan", 6600, 31)),
            1,
        )
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let employee = employee_service.get_employee_by_id("6").await.unwrap();

    assert_eq!(employee.id, 6);
    assert_eq!(employee.name, "Pavan");
    assert_eq!(cached_ids(&test).await?, vec![6]);

    test.assert_mocks();

    Ok(())
}

/// Tests fetching the same employee twice.
///
/// Verifies that repeated lookups return equal values and overwrite the cache entry
/// rather than duplicating it.
///
/// Expected: Ok with identical employees and a single cache row
#[tokio::test]
async fn repeated_lookups_keep_single_cache_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_employee_endpoint(
            12,
            Some(factory::mock_employee_record(12, "Rohit", 8400, 23)),
            2,
        )
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let first = employee_service.get_employee_by_id("12").await.unwrap();
    let second = employee_service.get_employee_by_id("12").await.unwrap();

    assert_eq!(first, second);
    assert_eq!(cached_ids(&test).await?, vec![12]);

    test.assert_mocks();

    Ok(())
}

/// Tests a successful remote answer without data.
///
/// Expected: Err(DataNotFound) without consulting the cache
#[tokio::test]
async fn fails_with_data_not_found_when_remote_has_no_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_cached_employee(3, "Rajesh", 4100, 22)
        .with_employee_endpoint(3, None, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.get_employee_by_id("3").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::DataNotFound))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests an empty response body, which the directory sends for unknown ids.
///
/// Expected: Err(DataNotFound)
#[tokio::test]
async fn fails_with_data_not_found_for_empty_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/v1/employee/99")
                .with_status(200)
                .with_body("")
                .expect(1)
                .create()
        })
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.get_employee_by_id("99").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::DataNotFound))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests rate limiting with the employee cached.
///
/// Expected: Ok with the cached employee
#[tokio::test]
async fn falls_back_to_cache_when_rate_limited() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_cached_employee(9, "Viraj", 6000, 19)
        .with_error_endpoint("GET", "/api/v1/employee/9", 429, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let employee = employee_service.get_employee_by_id("9").await.unwrap();

    assert_eq!(employee.name, "Viraj");
    assert_eq!(employee.salary, 6000);

    test.assert_mocks();

    Ok(())
}

/// Tests rate limiting with the employee not cached.
///
/// Expected: Err(DataNotFound)
#[tokio::test]
async fn fails_with_data_not_found_on_fallback_miss() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_error_endpoint("GET", "/api/v1/employee/9", 500, 1)
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.get_employee_by_id("9").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::DataNotFound))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests an empty identifier.
///
/// Expected: Err(InvalidArgument) without any remote request
#[tokio::test]
async fn fails_for_empty_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_employee_tables().build().await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.get_employee_by_id("").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::InvalidArgument(_)))
    ));

    Ok(())
}

/// Tests a non-numeric identifier.
///
/// Expected: Err(InvalidNumericFormat) without any remote request
#[tokio::test]
async fn fails_for_non_numeric_id() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", mockito::Matcher::Any)
                .expect(0)
                .create()
        })
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let result = employee_service.get_employee_by_id("abc").await;

    assert!(matches!(
        result,
        Err(Error::DirectoryError(DirectoryError::InvalidNumericFormat(_)))
    ));

    test.assert_mocks();

    Ok(())
}

/// Tests a failing cache write on the success path.
///
/// Verifies that a remote success is still returned when the employee cannot be cached
/// because the cache table does not exist.
///
/// Expected: Ok with the remote employee
#[tokio::test]
async fn succeeds_when_cache_write_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_endpoint(
            9,
            Some(factory::mock_employee_record(9, "Siraj", 6900, 28)),
            1,
        )
        .build()
        .await?;

    let employee_service = EmployeeService::new(&test.db, &test.directory_client);
    let employee = employee_service.get_employee_by_id("9").await.unwrap();

    assert_eq!(employee.id, 9);
    assert_eq!(employee.name, "Siraj");

    test.assert_mocks();

    Ok(())
}
