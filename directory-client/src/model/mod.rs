pub mod employee;

use serde::{Deserialize, Serialize};

/// Envelope wrapping every directory API response body.
///
/// Every field may be absent and decodes as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: Option<String>,
    pub data: Option<T>,
    pub message: Option<String>,
}
