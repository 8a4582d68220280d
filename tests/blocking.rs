#![cfg(feature = "blocking")]

use mockito::Matcher;
use rs_sso_client::blocking::Client;
use rs_sso_client::{ClientConfig, ErrorKind, IdentityProviderKind, SsoError, StartLoginRequest};
use serde_json::json;

const APP_ID: &str = "test-app-id";

fn test_client(base_uri: String) -> Client {
    Client::with_config(ClientConfig::new(base_uri, APP_ID)).expect("failed to build client")
}

#[test]
fn blocking_start_login_success() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/start")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "app_id": APP_ID,
            "identity_provider": "slack"
        })))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"token": "tok-blocking"}"#)
        .create();

    let client = test_client(server.url());

    let url = client
        .start_login(StartLoginRequest::provider(IdentityProviderKind::Slack))
        .expect("start_login should succeed");

    assert_eq!(
        url.as_str(),
        format!("{}/redirect?token=tok-blocking", server.url())
    );

    mock.assert();
}

#[test]
fn blocking_start_login_invalid_argument() {
    let mut server = mockito::Server::new();

    let mock = server.mock("POST", "/start").expect(0).create();

    let client = test_client(server.url());

    let err = client
        .start_login(StartLoginRequest::default())
        .expect_err("start_login should reject a request without a selector");

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    mock.assert();
}

#[test]
fn blocking_start_login_api_error() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/start")
        .with_status(400)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"error": {"code": "invalid_provider"}}"#)
        .create();

    let client = test_client(server.url());

    let err = client
        .start_login(StartLoginRequest::provider_id("missing-idp"))
        .expect_err("start_login should fail with API error");

    match err {
        SsoError::StartLoginFailed(msg) => {
            assert_eq!(msg, "errorCode: invalid_provider\nerrorMessage: ");
        }
        other => panic!("expected SsoError::StartLoginFailed, got: {:?}", other),
    }

    mock.assert();
}

#[test]
fn blocking_get_providers_success() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/providers")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("app_id".into(), APP_ID.into()),
            Matcher::UrlEncoded("email_address".into(), "jo@acme.example".into()),
        ]))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{
                "social_identity_providers": [{"type": "twitch"}, {"type": "amazon"}],
                "enterprise_identity_providers": [
                    {"name": "Acme", "identity_provider_id": "idp-acme", "type": "onelogin"}
                ],
                "suggested_identity_provider": "onelogin"
            }"#,
        )
        .create();

    let client = test_client(server.url());

    let data = client
        .get_providers(Some("jo@acme.example"))
        .expect("get_providers should succeed");

    let social: Vec<_> = data.social_providers.iter().map(|p| p.kind).collect();
    assert_eq!(
        social,
        vec![IdentityProviderKind::Twitch, IdentityProviderKind::Amazon]
    );
    assert_eq!(data.enterprise_providers[0].kind, IdentityProviderKind::Onelogin);
    assert_eq!(data.suggested_provider, Some(IdentityProviderKind::Onelogin));

    mock.assert();
}

#[test]
fn blocking_get_providers_malformed_body() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("GET", "/providers")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create();

    let client = test_client(server.url());

    let err = client
        .get_providers(None)
        .expect_err("get_providers should fail to decode");

    assert_eq!(err.kind(), ErrorKind::DeserializationFailed);

    mock.assert();
}
