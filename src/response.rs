use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::provider::{EnterpriseProvider, IdentityProviderKind, Provider, ProviderData};

/// Structured error object the service embeds in failed responses.
///
/// Both fields are optional; non-string values are ignored.
#[derive(Debug, Default)]
pub(crate) struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Extracts the `error` object from a decoded body, if it has one.
    pub(crate) fn from_body(body: &Value) -> Option<Self> {
        let error = body.get("error")?.as_object()?;
        let field = |name: &str| error.get(name).and_then(Value::as_str).map(str::to_owned);
        Some(Self {
            code: field("code"),
            message: field("message"),
        })
    }
}

/// Response from the `providers` endpoint.
///
/// A list that is missing, `null` or not an array reads as empty. Social
/// records and the suggestion are kept as raw JSON so that anything other
/// than a known literal is dropped instead of failing the response.
#[derive(Debug, Deserialize)]
pub(crate) struct ProvidersResponse {
    #[serde(default, deserialize_with = "list_or_empty")]
    social_identity_providers: Vec<Value>,
    #[serde(default, deserialize_with = "list_or_empty")]
    enterprise_identity_providers: Vec<EnterpriseProvider>,
    #[serde(default)]
    suggested_identity_provider: Option<Value>,
}

fn list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(list @ Value::Array(_)) => serde_json::from_value(list).map_err(de::Error::custom),
        _ => Ok(Vec::new()),
    }
}

impl ProvidersResponse {
    /// Converts the wire shape into [`ProviderData`], dropping unknown social kinds.
    pub(crate) fn into_provider_data(self) -> ProviderData {
        let social_providers = self
            .social_identity_providers
            .into_iter()
            .filter_map(|record| {
                let kind = record
                    .get("type")
                    .and_then(Value::as_str)
                    .and_then(IdentityProviderKind::from_literal);
                if kind.is_none() {
                    debug!(%record, "dropping unrecognized social provider");
                }
                kind.map(|kind| Provider { kind })
            })
            .collect();

        let suggested_provider = self
            .suggested_identity_provider
            .as_ref()
            .and_then(Value::as_str)
            .and_then(IdentityProviderKind::from_literal);

        ProviderData {
            social_providers,
            enterprise_providers: self.enterprise_identity_providers,
            suggested_provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_extracted() {
        let body: Value =
            serde_json::from_str(r#"{"error": {"code": "bad_app", "message": "Unknown app"}}"#)
                .unwrap();
        let err = ApiErrorBody::from_body(&body).unwrap();
        assert_eq!(err.code.as_deref(), Some("bad_app"));
        assert_eq!(err.message.as_deref(), Some("Unknown app"));
    }

    #[test]
    fn error_body_without_fields() {
        let body: Value = serde_json::from_str(r#"{"error": {}}"#).unwrap();
        let err = ApiErrorBody::from_body(&body).unwrap();
        assert!(err.code.is_none());
        assert!(err.message.is_none());
    }

    #[test]
    fn error_body_ignores_non_string_fields() {
        let body: Value =
            serde_json::from_str(r#"{"error": {"code": 500, "message": "boom"}}"#).unwrap();
        let err = ApiErrorBody::from_body(&body).unwrap();
        assert!(err.code.is_none());
        assert_eq!(err.message.as_deref(), Some("boom"));
    }

    #[test]
    fn error_body_must_be_object() {
        let body: Value = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert!(ApiErrorBody::from_body(&body).is_none());
        let body: Value = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
        assert!(ApiErrorBody::from_body(&body).is_none());
    }

    #[test]
    fn providers_preserve_order_and_drop_unknown() {
        let json = r#"{
            "social_identity_providers": [
                {"type": "google"},
                {"type": "myspace"},
                {},
                {"type": "microsoft"}
            ],
            "enterprise_identity_providers": [
                {"name": "Acme", "identity_provider_id": "idp-1", "type": "okta"},
                {"name": "Globex", "identity_provider_id": "idp-2", "type": "microsoft"}
            ],
            "suggested_identity_provider": "okta"
        }"#;
        let data = serde_json::from_str::<ProvidersResponse>(json)
            .unwrap()
            .into_provider_data();

        let social: Vec<_> = data.social_providers.iter().map(|p| p.kind).collect();
        assert_eq!(
            social,
            vec![IdentityProviderKind::Google, IdentityProviderKind::Microsoft]
        );
        assert_eq!(data.enterprise_providers.len(), 2);
        assert_eq!(data.enterprise_providers[0].name, "Acme");
        assert_eq!(data.enterprise_providers[1].identity_provider_id, "idp-2");
        assert_eq!(data.suggested_provider, Some(IdentityProviderKind::Okta));
    }

    #[test]
    fn unknown_suggestion_is_none() {
        let data = serde_json::from_str::<ProvidersResponse>(
            r#"{"social_identity_providers": [], "suggested_identity_provider": "myspace"}"#,
        )
        .unwrap()
        .into_provider_data();
        assert!(data.suggested_provider.is_none());
    }

    #[test]
    fn missing_lists_are_empty() {
        let data = serde_json::from_str::<ProvidersResponse>("{}")
            .unwrap()
            .into_provider_data();
        assert_eq!(data, ProviderData::default());
    }

    #[test]
    fn non_string_suggestion_is_none() {
        let data = serde_json::from_str::<ProvidersResponse>(
            r#"{"social_identity_providers": [{"type": "google"}], "suggested_identity_provider": {"type": "okta"}}"#,
        )
        .unwrap()
        .into_provider_data();
        assert!(data.suggested_provider.is_none());
        assert_eq!(data.social_providers.len(), 1);
    }

    #[test]
    fn non_string_social_type_is_dropped() {
        let data = serde_json::from_str::<ProvidersResponse>(
            r#"{"social_identity_providers": [{"type": 7}, "github", {"type": "apple"}]}"#,
        )
        .unwrap()
        .into_provider_data();
        let social: Vec<_> = data.social_providers.iter().map(|p| p.kind).collect();
        assert_eq!(social, vec![IdentityProviderKind::Apple]);
    }

    #[test]
    fn null_lists_are_empty() {
        let data = serde_json::from_str::<ProvidersResponse>(
            r#"{"social_identity_providers": [{"type": "google"}], "enterprise_identity_providers": null}"#,
        )
        .unwrap()
        .into_provider_data();
        assert_eq!(data.social_providers.len(), 1);
        assert!(data.enterprise_providers.is_empty());

        let data = serde_json::from_str::<ProvidersResponse>(
            r#"{"social_identity_providers": null, "enterprise_identity_providers": "none"}"#,
        )
        .unwrap()
        .into_provider_data();
        assert_eq!(data, ProviderData::default());
    }

    #[test]
    fn bad_enterprise_record_fails_whole_response() {
        let json = r#"{
            "enterprise_identity_providers": [
                {"name": "Acme", "identity_provider_id": "idp-1", "type": "okta"},
                {"name": "Broken", "type": "okta"}
            ]
        }"#;
        assert!(serde_json::from_str::<ProvidersResponse>(json).is_err());
    }
}
