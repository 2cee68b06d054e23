mod create_employee;

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use employee_directory::server::controller::employee::*;
use serde::de::DeserializeOwned;

use super::*;

/// Read and decode a JSON response body
async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
