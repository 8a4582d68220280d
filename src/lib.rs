//! Client SDK for a hosted single-sign-on (SSO) service.
//!
//! This crate provides both async and sync (blocking) clients for the
//! service's login API:
//!
//! - [`Client::start_login`] — Start a login with a social or enterprise identity provider
//! - [`Client::get_providers`] — List the identity providers enabled for the application
//! - [`parse_payload`] — Decode the login result from the app's callback URL
//!
//! # Quick Start (async)
//!
//! ```no_run
//! use rs_sso_client::{Client, IdentityProviderKind, StartLoginRequest};
//!
//! # async fn example() -> rs_sso_client::Result<()> {
//! let client = Client::new("https://sso.example.com", "my-app-id")?;
//!
//! let providers = client.get_providers(Some("jane@example.com")).await?;
//! for provider in &providers.social_providers {
//!     println!("social: {}", provider.kind);
//! }
//!
//! let redirect = client
//!     .start_login(StartLoginRequest {
//!         identity_provider: Some(IdentityProviderKind::Google),
//!         identity_provider_id: None,
//!         destination_url: Some("myapp://login-complete".into()),
//!         callback_url: None,
//!     })
//!     .await?;
//! println!("Continue at {}", redirect);
//!
//! // Later, when the app is reopened through its deep link:
//! let payload = rs_sso_client::parse_payload(["myapp://login-complete?payload=eyJhIjoxfQ=="])?;
//! println!("Login result: {}", payload);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod launcher;
pub mod payload;
pub mod provider;
pub mod request;

#[cfg(feature = "blocking")]
pub mod blocking;

mod exec;
mod response;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ErrorKind, Result, SsoError};
#[cfg(feature = "browser")]
pub use launcher::SystemBrowser;
pub use launcher::BrowserLauncher;
pub use payload::{parse_payload, parse_payload_url};
pub use provider::{EnterpriseProvider, IdentityProviderKind, Provider, ProviderData};
pub use request::{StartLoginRequest, StartLoginRequestBuilder};

// Compile-time assertions: key types must be Send + Sync for use across threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    let _ = assert_send_sync::<Client>;
    let _ = assert_send_sync::<SsoError>;
    let _ = assert_send_sync::<ClientConfig>;
    let _ = assert_send_sync::<ProviderData>;
};
