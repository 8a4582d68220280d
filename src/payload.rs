//! Decoding of the login result handed back through the app's callback URL.
//!
//! After the user finishes authenticating, the service sends the browser to
//! the application's deep link with a `payload` query parameter holding the
//! result as base64-encoded UTF-8 text.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use url::Url;

use crate::error::{Result, SsoError};

const PAYLOAD_PARAM: &str = "payload";

/// Decodes the `payload` parameter of the first callback URL.
///
/// Only the first URL yielded by `callback_urls` is inspected.
///
/// # Example
///
/// ```
/// let decoded = rs_sso_client::parse_payload(["myapp://done?payload=eyJhIjoxfQ=="])?;
/// assert_eq!(decoded, r#"{"a":1}"#);
/// # Ok::<(), rs_sso_client::SsoError>(())
/// ```
pub fn parse_payload<I>(callback_urls: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let Some(first) = callback_urls.into_iter().next() else {
        return Err(no_payload());
    };
    let url = Url::parse(first.as_ref())
        .map_err(|e| SsoError::ParsePayloadFailed(format!("invalid callback URL: {}", e)))?;
    parse_payload_url(&url)
}

/// Decodes the `payload` parameter of an already parsed callback URL.
pub fn parse_payload_url(url: &Url) -> Result<String> {
    let encoded = url
        .query()
        .and_then(find_payload)
        .ok_or_else(no_payload)?;

    let bytes = BASE64.decode(encoded.as_bytes()).map_err(|_| {
        SsoError::ParsePayloadFailed("Payload must be in valid Base64 format.".into())
    })?;

    String::from_utf8(bytes)
        .map_err(|_| SsoError::ParsePayloadFailed("Payload is not valid UTF-8.".into()))
}

/// Returns the first non-empty `payload` value in a raw query string.
///
/// Values are percent-decoded without form semantics: a literal `+` is a
/// base64 character and must not turn into a space.
fn find_payload(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            let name = urlencoding::decode(name).ok()?;
            if name != PAYLOAD_PARAM {
                return None;
            }
            let value = urlencoding::decode(value).ok()?;
            (!value.is_empty()).then(|| value.into_owned())
        })
        .next()
}

fn no_payload() -> SsoError {
    SsoError::ParsePayloadFailed("No payload parameter found in query.".into())
}
