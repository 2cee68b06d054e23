use std::{net::SocketAddr, str::FromStr};

use crate::server::error::config::ConfigError;

static DEFAULT_DIRECTORY_API_URL: &str = "https://dummy.restapiexample.com/";
static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
static DEFAULT_USER_AGENT: &str = concat!("employee-directory/", env!("CARGO_PKG_VERSION"));
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub directory_api_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub listen_addr: SocketAddr,
    /// Refresh the employee cache from the remote directory before serving requests
    pub warm_cache_on_startup: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            directory_api_url: optional("DIRECTORY_API_URL")
                .unwrap_or_else(|| DEFAULT_DIRECTORY_API_URL.to_string()),
            user_agent: optional("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            request_timeout_secs: parsed("REQUEST_TIMEOUT_SECS")?
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            listen_addr: match parsed("LISTEN_ADDR")? {
                Some(addr) => addr,
                None => parse_value("LISTEN_ADDR", DEFAULT_LISTEN_ADDR)?,
            },
            warm_cache_on_startup: parsed("WARM_CACHE_ON_STARTUP")?.unwrap_or(true),
        })
    }
}

fn required(var: &str) -> Result<String, ConfigError> {
    optional(var).ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn optional(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T>(var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(var).map(|value| parse_value(var, &value)).transpose()
}

fn parse_value<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}
