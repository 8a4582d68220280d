use thiserror::Error;

/// Maximum characters to include in error message body for debugging.
pub(crate) const MAX_ERROR_BODY_CHARS: usize = 200;

/// Errors that can occur when using the SSO SDK.
///
/// Every operation reports its failures through exactly one of these
/// variants. The payload is a best-effort human-readable description.
#[derive(Debug, Error)]
pub enum SsoError {
    /// The caller passed an invalid combination of arguments or configuration.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The start-login call failed, either at the transport or in the service.
    #[error("start login failed: {0}")]
    StartLoginFailed(String),

    /// The provider-listing call failed, either at the transport or in the service.
    #[error("get providers failed: {0}")]
    GetProvidersFailed(String),

    /// A response body was received but could not be decoded.
    #[error("deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The callback URL held no usable payload.
    #[error("parse payload failed: {0}")]
    ParsePayloadFailed(String),
}

/// Fieldless tag for each [`SsoError`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    StartLoginFailed,
    GetProvidersFailed,
    DeserializationFailed,
    ParsePayloadFailed,
}

impl SsoError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SsoError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            SsoError::StartLoginFailed(_) => ErrorKind::StartLoginFailed,
            SsoError::GetProvidersFailed(_) => ErrorKind::GetProvidersFailed,
            SsoError::DeserializationFailed(_) => ErrorKind::DeserializationFailed,
            SsoError::ParsePayloadFailed(_) => ErrorKind::ParsePayloadFailed,
        }
    }

    /// Returns the description attached to this error, if any.
    pub fn description(&self) -> Option<&str> {
        let text = match self {
            SsoError::InvalidArgument(s)
            | SsoError::StartLoginFailed(s)
            | SsoError::GetProvidersFailed(s)
            | SsoError::DeserializationFailed(s)
            | SsoError::ParsePayloadFailed(s) => s.as_str(),
        };
        (!text.is_empty()).then_some(text)
    }
}

impl From<serde_json::Error> for SsoError {
    fn from(e: serde_json::Error) -> Self {
        SsoError::DeserializationFailed(e.to_string())
    }
}

/// A specialized Result type for SSO operations.
pub type Result<T> = std::result::Result<T, SsoError>;

/// Renders a service `error` object the way the service documents it.
pub(crate) fn describe_service_error(code: Option<&str>, message: Option<&str>) -> String {
    format!(
        "errorCode: {}\nerrorMessage: {}",
        code.unwrap_or_default(),
        message.unwrap_or_default()
    )
}

/// Truncates a string to at most `max_chars` characters on a valid UTF-8 boundary.
pub(crate) fn truncate_str(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
