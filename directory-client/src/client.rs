use std::{sync::Arc, time::Duration};

use serde::de::DeserializeOwned;

use crate::{endpoints::employee::EmployeeEndpoints, Error};

static DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/";
static DEFAULT_USER_AGENT: &str = concat!("directory-client/", env!("CARGO_PKG_VERSION"));
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Handle to the remote directory API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<ClientRef>,
}

#[derive(Debug)]
struct ClientRef {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Employee endpoints (`/api/v1/employee*`, `/api/v1/create`, `/api/v1/delete`).
    pub fn employee(&self) -> EmployeeEndpoints<'_> {
        EmployeeEndpoints::new(self)
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Send a request, turning non-success statuses into errors, and return the raw body.
    pub(crate) async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, Error> {
        let response = request.send().await?.error_for_status()?;

        Ok(response.text().await?)
    }

    /// Send a request and decode the JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, Error> {
        let body = self.send(request).await?;

        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`Client`].
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    timeout: Duration,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Root URL of the directory API, with or without a trailing slash.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Total time allowed for a single request, including reading the body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = self.base_url.trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::ConfigError(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        Ok(Client {
            inner: Arc::new(ClientRef { http, base_url }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
