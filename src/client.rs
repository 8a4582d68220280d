use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{Result, SsoError};
use crate::exec::{handle_providers_response, handle_start_login_response, transport_error};
use crate::launcher::{BrowserLauncher, launch};
use crate::provider::ProviderData;
use crate::request::{StartLoginRequest, providers_url, redirect_url};

/// Async client for the SSO service.
///
/// Holds no mutable state; share it behind an `Arc` to issue calls from
/// several tasks at once.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Creates a new client for the given service address and application.
    pub fn new(base_uri: impl Into<String>, app_id: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_uri, app_id))
    }

    /// Creates a new client with custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| {
                SsoError::InvalidArgument(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { http, config })
    }

    /// Creates a new client from `SSO_BASE_URI` and `SSO_APP_ID`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Starts a login and returns the URL the user must open to continue.
    ///
    /// Fails with [`SsoError::InvalidArgument`] before any request is sent
    /// unless exactly one of `identity_provider` and `identity_provider_id`
    /// is set.
    pub async fn start_login(&self, request: StartLoginRequest) -> Result<Url> {
        let body = request.to_body(self.config.app_id())?;
        let endpoint = self.config.endpoint("start");
        debug!(%endpoint, "starting SSO login");

        let response = self
            .http
            .post(&endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error(SsoError::StartLoginFailed, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(SsoError::StartLoginFailed, e))?;

        let token = handle_start_login_response(status, &text)?;
        redirect_url(&self.config, &token)
    }

    /// Starts a login and opens the redirect with `launcher`.
    pub async fn start_login_with<L>(&self, request: StartLoginRequest, launcher: &L) -> Result<Url>
    where
        L: BrowserLauncher + ?Sized,
    {
        let url = self.start_login(request).await?;
        launch(launcher, url)
    }

    /// Lists the identity providers enabled for the application.
    ///
    /// When `email_address` is given the service also suggests a provider
    /// based on its domain.
    pub async fn get_providers(&self, email_address: Option<&str>) -> Result<ProviderData> {
        let url = providers_url(&self.config, email_address);
        debug!(%url, "fetching SSO providers");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(SsoError::GetProvidersFailed, e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| transport_error(SsoError::GetProvidersFailed, e))?;

        handle_providers_response(status, &text)
    }

    /// Decodes the login result from the app's callback URLs.
    ///
    /// See [`crate::parse_payload`].
    pub fn parse_payload<I>(callback_urls: I) -> Result<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        crate::payload::parse_payload(callback_urls)
    }
}
