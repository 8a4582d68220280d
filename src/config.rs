use std::env;
use std::time::Duration;

use crate::error::{Result, SsoError};

/// Environment variable holding the service base address.
pub const ENV_BASE_URI: &str = "SSO_BASE_URI";

/// Environment variable holding the application identifier.
pub const ENV_APP_ID: &str = "SSO_APP_ID";

/// Configuration for the SSO client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base address, always ending in `/`.
    pub(crate) base_uri: String,

    /// Application identifier registered with the service.
    pub(crate) app_id: String,

    /// HTTP request timeout.
    pub timeout: Duration,

    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Creates a configuration for the given service address and application.
    pub fn new(base_uri: impl Into<String>, app_id: impl Into<String>) -> Self {
        Self {
            base_uri: normalize_base_uri(base_uri.into()),
            app_id: app_id.into(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Reads `SSO_BASE_URI` and `SSO_APP_ID` from the environment.
    pub fn from_env() -> Result<Self> {
        let base_uri = require_env(ENV_BASE_URI)?;
        let app_id = require_env(ENV_APP_ID)?;
        Ok(Self::new(base_uri, app_id))
    }

    /// Replaces the service base address.
    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = normalize_base_uri(base_uri.into());
        self
    }

    /// Sets the HTTP request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the TCP connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Returns the normalized base address.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the application identifier.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Joins a relative path onto the base address.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_uri, path)
    }
}

/// Appends a trailing `/` unless one is already present.
pub(crate) fn normalize_base_uri(mut base_uri: String) -> String {
    if !base_uri.ends_with('/') {
        base_uri.push('/');
    }
    base_uri
}

fn require_env(name: &str) -> Result<String> {
    let value =
        env::var(name).map_err(|_| SsoError::InvalidArgument(format!("{} not set", name)))?;
    if value.is_empty() {
        return Err(SsoError::InvalidArgument(format!("{} is empty", name)));
    }
    Ok(value)
}
