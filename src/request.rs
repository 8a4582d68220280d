//! Request building for the SSO service endpoints.

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{Result, SsoError};
use crate::provider::IdentityProviderKind;

/// Request parameters for starting a login.
///
/// Exactly one of `identity_provider` and `identity_provider_id` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartLoginRequest {
    /// Social provider to log in with.
    pub identity_provider: Option<IdentityProviderKind>,
    /// Enterprise provider identifier to log in with.
    pub identity_provider_id: Option<String>,
    /// App deep link the service returns to after login.
    pub destination_url: Option<String>,
    /// Overrides the callback target configured for the application.
    pub callback_url: Option<String>,
}

impl StartLoginRequest {
    /// Starts building a request.
    pub fn builder() -> StartLoginRequestBuilder {
        StartLoginRequestBuilder::default()
    }

    /// Shorthand for a social provider login with no URLs.
    pub fn provider(kind: IdentityProviderKind) -> Self {
        Self {
            identity_provider: Some(kind),
            ..Self::default()
        }
    }

    /// Shorthand for an enterprise provider login with no URLs.
    pub fn provider_id(id: impl Into<String>) -> Self {
        Self {
            identity_provider_id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Validates the selector pair and builds the JSON body for `start`.
    pub(crate) fn to_body<'a>(&'a self, app_id: &'a str) -> Result<StartLoginBody<'a>> {
        match (&self.identity_provider, &self.identity_provider_id) {
            (None, None) => Err(SsoError::InvalidArgument(
                "identity_provider or identity_provider_id must have a value".into(),
            )),
            (Some(_), Some(_)) => Err(SsoError::InvalidArgument(
                "identity_provider and identity_provider_id cannot both have a value".into(),
            )),
            (provider, provider_id) => Ok(StartLoginBody {
                app_id,
                identity_provider: *provider,
                identity_provider_id: provider_id.as_deref(),
                destination_url: self.destination_url.as_deref(),
                callback_url: self.callback_url.as_deref(),
            }),
        }
    }
}

/// Builder for [`StartLoginRequest`].
#[derive(Debug, Default)]
pub struct StartLoginRequestBuilder {
    inner: StartLoginRequest,
}

impl StartLoginRequestBuilder {
    /// Selects a social provider.
    pub fn identity_provider(mut self, kind: IdentityProviderKind) -> Self {
        self.inner.identity_provider = Some(kind);
        self
    }

    /// Selects an enterprise provider by its identifier.
    pub fn identity_provider_id(mut self, id: impl Into<String>) -> Self {
        self.inner.identity_provider_id = Some(id.into());
        self
    }

    /// Sets the app deep link to return to after login.
    pub fn destination_url(mut self, url: impl Into<String>) -> Self {
        self.inner.destination_url = Some(url.into());
        self
    }

    /// Overrides the service's callback target.
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.inner.callback_url = Some(url.into());
        self
    }

    /// Finishes the builder. Selector validation happens when the request is sent.
    pub fn build(self) -> StartLoginRequest {
        self.inner
    }
}

/// JSON body posted to `start`. Unset keys are omitted.
#[derive(Debug, Serialize)]
pub(crate) struct StartLoginBody<'a> {
    app_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    identity_provider: Option<IdentityProviderKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    identity_provider_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
}

/// Builds the `providers` URL with its query string.
///
/// Values are percent-encoded with the RFC 3986 unreserved set, so `+`
/// becomes `%2B` and a space becomes `%20`.
pub(crate) fn providers_url(config: &ClientConfig, email_address: Option<&str>) -> String {
    let mut params = vec![("app_id", config.app_id())];
    if let Some(email) = email_address {
        params.push(("email_address", email));
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", config.endpoint("providers"), query)
}

/// Builds the browser URL that hands a login token to the service.
pub(crate) fn redirect_url(config: &ClientConfig, token: &str) -> Result<url::Url> {
    let raw = format!("{}?token={}", config.endpoint("redirect"), urlencoding::encode(token));
    url::Url::parse(&raw)
        .map_err(|e| SsoError::StartLoginFailed(format!("invalid redirect URL {}: {}", raw, e)))
}
