//! Constant values shared by test setups.

/// User agent string for the test directory client.
pub static TEST_USER_AGENT: &str = "employee-directory-tests/1.0";

/// Confirmation message returned by the mocked delete endpoint.
pub static TEST_DELETE_MESSAGE: &str = "successfully! deleted Record";
