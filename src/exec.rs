//! Common execution utilities for async and blocking clients.
//!
//! Each function takes the status and body of a finished HTTP exchange and
//! turns it into the operation's result, so both clients classify responses
//! the same way.

use serde_json::Value;
use tracing::warn;

use crate::error::{MAX_ERROR_BODY_CHARS, Result, SsoError, describe_service_error, truncate_str};
use crate::provider::ProviderData;
use crate::response::{ApiErrorBody, ProvidersResponse};

/// Maps a failure to obtain a response into the operation's error variant.
pub(crate) fn transport_error(
    op_error: fn(String) -> SsoError,
    err: reqwest::Error,
) -> SsoError {
    warn!(error = %err, "SSO request failed");
    op_error(format!("HTTP request failed: {}", err))
}

/// Decodes the body as JSON. A body that is not JSON is a deserialization
/// failure whatever the status.
fn decode_body(status: reqwest::StatusCode, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        if !status.is_success() {
            warn!(%status, "SSO service returned an undecodable error body");
        }
        SsoError::from(e)
    })
}

fn unexpected_status(
    op_error: fn(String) -> SsoError,
    status: reqwest::StatusCode,
    text: &str,
) -> SsoError {
    warn!(%status, "SSO service returned an unexpected status");
    op_error(format!(
        "HTTP {} with body: {}",
        status,
        truncate_str(text, MAX_ERROR_BODY_CHARS)
    ))
}

fn service_error(op_error: fn(String) -> SsoError, error: ApiErrorBody) -> SsoError {
    warn!(code = ?error.code, message = ?error.message, "SSO service reported an error");
    op_error(describe_service_error(
        error.code.as_deref(),
        error.message.as_deref(),
    ))
}

/// Classifies a `start` response and returns the login token.
pub(crate) fn handle_start_login_response(
    status: reqwest::StatusCode,
    text: &str,
) -> Result<String> {
    let op_error: fn(String) -> SsoError = SsoError::StartLoginFailed;
    let body = decode_body(status, text)?;

    if let Some(token) = body.get("token").and_then(Value::as_str) {
        return Ok(token.to_string());
    }
    if let Some(error) = ApiErrorBody::from_body(&body) {
        return Err(service_error(op_error, error));
    }
    if !status.is_success() {
        return Err(unexpected_status(op_error, status, text));
    }

    Err(SsoError::DeserializationFailed(
        "response contained neither a token nor an error".into(),
    ))
}

/// Classifies a `providers` response.
pub(crate) fn handle_providers_response(
    status: reqwest::StatusCode,
    text: &str,
) -> Result<ProviderData> {
    let op_error: fn(String) -> SsoError = SsoError::GetProvidersFailed;
    let body = decode_body(status, text)?;

    if let Some(error) = ApiErrorBody::from_body(&body) {
        return Err(service_error(op_error, error));
    }
    if !status.is_success() {
        return Err(unexpected_status(op_error, status, text));
    }
    if !body.is_object() {
        return Err(SsoError::DeserializationFailed(
            "providers response is not a JSON object".into(),
        ));
    }

    let response: ProvidersResponse = serde_json::from_value(body)?;
    Ok(response.into_provider_data())
}
