//! Service layer for business logic and orchestration.
//!
//! The employee service coordinates the remote directory client and the local cache,
//! using [`fallback::FallbackContext`] to decide when a cached answer may stand in for the
//! remote one. Aggregation and input validation are pure functions the service calls into.

pub mod aggregation;
pub mod employee;
pub mod fallback;
pub mod validation;
