use serde_json::{Map, Value};

use crate::{
    model::{employee::RemoteEmployeeRecord, ApiResponse},
    Client, Error,
};

pub struct EmployeeEndpoints<'a> {
    client: &'a Client,
}

impl<'a> EmployeeEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetch every employee known to the directory.
    ///
    /// An empty body or a response without a `data` array decodes as an empty list.
    pub async fn get_all_employees(&self) -> Result<Vec<RemoteEmployeeRecord>, Error> {
        let url = self.client.url("api/v1/employees");
        tracing::debug!("GET {}", url);

        let body = self.client.send(self.client.http().get(url)).await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        let response: ApiResponse<Vec<RemoteEmployeeRecord>> = serde_json::from_str(&body)?;

        Ok(response.data.unwrap_or_default())
    }

    /// Fetch a single employee.
    ///
    /// Returns `Ok(None)` when the directory answers successfully but has no record, either
    /// as an empty body or as `"data": null`.
    pub async fn get_employee(&self, id: i32) -> Result<Option<RemoteEmployeeRecord>, Error> {
        let url = self.client.url(&format!("api/v1/employee/{}", id));
        tracing::debug!("GET {}", url);

        let body = self.client.send(self.client.http().get(url)).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let response: ApiResponse<RemoteEmployeeRecord> = serde_json::from_str(&body)?;

        Ok(response.data)
    }

    /// Create an employee, forwarding the input fields unchanged.
    ///
    /// Returns the created record including the identifier assigned by the directory.
    pub async fn create_employee(
        &self,
        fields: &Map<String, Value>,
    ) -> Result<RemoteEmployeeRecord, Error> {
        let url = self.client.url("api/v1/create");
        tracing::debug!("POST {}", url);

        let response: ApiResponse<RemoteEmployeeRecord> = self
            .client
            .send_json(self.client.http().post(url).json(fields))
            .await?;

        response.data.ok_or_else(|| {
            Error::UnexpectedResponse("create response did not contain the created employee".into())
        })
    }

    /// Delete an employee and return the confirmation message as sent by the directory.
    ///
    /// Any success status counts as a deletion. The message is `None` when the body is empty,
    /// not JSON, or carries no `message`.
    pub async fn delete_employee(&self, id: i32) -> Result<Option<String>, Error> {
        let url = self.client.url(&format!("api/v1/delete/{}", id));
        tracing::debug!("DELETE {}", url);

        let body = self.client.send(self.client.http().delete(url)).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        match serde_json::from_str::<ApiResponse<Value>>(&body) {
            Ok(response) => Ok(response.message),
            Err(e) => {
                tracing::warn!("Delete of employee {} returned an undecodable body: {}", id, e);
                Ok(None)
            }
        }
    }
}
