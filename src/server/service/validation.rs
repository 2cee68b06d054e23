//! Validation of identifiers and untyped creation input.

use serde_json::{Map, Value};

use crate::server::error::directory::DirectoryError;

static EMP_NAME: &str = "name";
static EMP_SALARY: &str = "salary";
static EMP_AGE: &str = "age";

/// Parse an employee identifier taken from a request path
pub fn parse_employee_id(id: &str) -> Result<i32, DirectoryError> {
    if id.is_empty() {
        return Err(DirectoryError::InvalidArgument(
            "Data should not empty or null".to_string(),
        ));
    }

    id.parse::<i32>().map_err(|_| {
        DirectoryError::InvalidNumericFormat(
            "Invalid data provided for id, please provide valid integer".to_string(),
        )
    })
}

/// Check creation input before it is forwarded to the remote directory
///
/// Checks run in order: `name`, `salary` and `age` present and non-null, then `salary` and
/// `age` parse as integers, then neither is negative. Numbers may be given as JSON strings
/// or JSON integers.
pub fn validate_creation_input(input: &Map<String, Value>) -> Result<(), DirectoryError> {
    let present = |key: &str| input.get(key).is_some_and(|value| !value.is_null());

    if !(present(EMP_NAME) && present(EMP_SALARY) && present(EMP_AGE)) {
        return Err(DirectoryError::IncompleteData);
    }

    let age = input.get(EMP_AGE).and_then(parse_integer);
    let salary = input.get(EMP_SALARY).and_then(parse_integer);

    let (Some(age), Some(salary)) = (age, salary) else {
        return Err(DirectoryError::InvalidNumericFormat(
            "Invalid data provided for age and salary, please provide valid integer".to_string(),
        ));
    };

    if age < 0 || salary < 0 {
        return Err(DirectoryError::InvalidArgument(
            "Invalid data provided for field age and salary".to_string(),
        ));
    }

    Ok(())
}

fn parse_integer(value: &Value) -> Option<i32> {
    match value {
        Value::String(s) => s.parse::<i32>().ok(),
        Value::Number(n) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
        _ => None,
    }
}
