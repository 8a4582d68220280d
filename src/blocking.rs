//! Synchronous (blocking) client for the SSO service.
//!
//! This module is only available when the `blocking` feature is enabled.
//! It mirrors the async [`crate::client::Client`] API using `reqwest::blocking`.
//!
//! # When to Use
//!
//! Use the blocking client when:
//! - You don't run an async runtime
//! - You're writing a CLI tool or simple script
//!
//! Use the async [`crate::Client`] when you already run on Tokio or issue
//! calls from many tasks.
//!
//! Do not call the blocking client from inside an async runtime; reqwest
//! panics when its blocking client is driven from an async context.
//!
//! # Example
//!
//! ```no_run
//! use rs_sso_client::blocking::Client;
//! use rs_sso_client::{IdentityProviderKind, StartLoginRequest};
//!
//! fn main() -> rs_sso_client::Result<()> {
//!     let client = Client::new("https://sso.example.com", "my-app-id")?;
//!
//!     let providers = client.get_providers(Some("jane@example.com"))?;
//!     println!("suggested: {:?}", providers.suggested_provider);
//!
//!     let request = StartLoginRequest::builder()
//!         .identity_provider(IdentityProviderKind::Google)
//!         .destination_url("myapp://login-complete")
//!         .build();
//!     let url = client.start_login(request)?;
//!     println!("open {}", url);
//!     Ok(())
//! }
//! ```

use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Result, SsoError};
use crate::exec::{handle_providers_response, handle_start_login_response, transport_error};
use crate::launcher::{BrowserLauncher, launch};
use crate::provider::ProviderData;
use crate::request::{StartLoginRequest, providers_url, redirect_url};

/// Synchronous client for the SSO service.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a new blocking client for the given service address and application.
    pub fn new(base_uri: impl Into<String>, app_id: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_uri, app_id))
    }

    /// Creates a new blocking client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                SsoError::InvalidArgument(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { http, config })
    }

    /// Creates a new blocking client from `SSO_BASE_URI` and `SSO_APP_ID`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Starts a login and returns the URL the user must open to continue.
    pub fn start_login(&self, request: StartLoginRequest) -> Result<Url> {
        let body = request.to_body(self.config.app_id())?;
        let endpoint = self.config.endpoint("start");
        debug!(%endpoint, "starting SSO login");

        let response = self
            .http
            .post(&endpoint)
            .json(&body)
            .send()
            .map_err(|e| transport_error(SsoError::StartLoginFailed, e))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| transport_error(SsoError::StartLoginFailed, e))?;

        let token = handle_start_login_response(status, &text)?;
        redirect_url(&self.config, &token)
    }

    /// Starts a login and opens the redirect with `launcher`.
    pub fn start_login_with<L>(&self, request: StartLoginRequest, launcher: &L) -> Result<Url>
    where
        L: BrowserLauncher + ?Sized,
    {
        let url = self.start_login(request)?;
        launch(launcher, url)
    }

    /// Lists the identity providers enabled for the application.
    pub fn get_providers(&self, email_address: Option<&str>) -> Result<ProviderData> {
        let url = providers_url(&self.config, email_address);
        debug!(%url, "fetching SSO providers");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| transport_error(SsoError::GetProvidersFailed, e))?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| transport_error(SsoError::GetProvidersFailed, e))?;

        handle_providers_response(status, &text)
    }

    /// Decodes the login result from the app's callback URLs.
    pub fn parse_payload<I>(callback_urls: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        crate::payload::parse_payload(callback_urls)
    }
}
