//! Tests for HTTP controller endpoints.
//!
//! Verifies request handling, status codes and error mapping for the employee API.

mod employee;

use directory_test_utils::prelude::*;

use crate::util::TestContextExt;
