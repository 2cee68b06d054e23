//! Tests for the create_employee endpoint.

use employee_directory::model::{api::ErrorDto, employee::Employee};
use serde_json::{json, Map, Value};

use super::*;

fn input(value: Value) -> Json<Map<String, Value>> {
    Json(value.as_object().cloned().unwrap())
}

/// Tests creating a valid employee.
///
/// Expected: 201 Created with the new employee
#[tokio::test]
async fn returns_201_with_created_employee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_create_employee_endpoint(factory::mock_employee_record(25, "test", 123, 23), 1)
        .build()
        .await?;

    let result = create_employee(
        State(test.into_app_state()),
        input(json!({"name": "test", "salary": "123", "age": "23"})),
    )
    .await;

    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let employee: Employee = json_body(resp).await;
    assert_eq!(employee.id, 25);

    test.assert_mocks();

    Ok(())
}

/// Tests incomplete input.
///
/// Expected: 400 Bad Request naming the required fields
#[tokio::test]
async fn returns_400_for_incomplete_input() -> Result<(), TestError> {
    let test = TestBuilder::new().with_employee_tables().build().await?;

    let result = create_employee(
        State(test.into_app_state()),
        input(json!({"name": "test", "salary": "123"})),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: ErrorDto = json_body(resp).await;
    assert_eq!(
        error.error,
        "Incomplete data provided, please provide name, age, salary"
    );

    Ok(())
}

/// Tests rate limiting by the remote directory.
///
/// Expected: 429 Too Many Requests
#[tokio::test]
async fn returns_429_when_rate_limited() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_error_endpoint("POST", "/api/v1/create", 429, 1)
        .build()
        .await?;

    let result = create_employee(
        State(test.into_app_state()),
        input(json!({"name": "test", "salary": "123", "age": "23"})),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

    test.assert_mocks();

    Ok(())
}

/// Tests a remote server error.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn returns_502_on_remote_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_employee_tables()
        .with_error_endpoint("POST", "/api/v1/create", 500, 1)
        .build()
        .await?;

    let result = create_employee(
        State(test.into_app_state()),
        input(json!({"name": "test", "salary": "123", "age": "23"})),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    test.assert_mocks();

    Ok(())
}
