//! Identity provider model types.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Every identity provider kind the service knows about.
///
/// The set is closed. Unknown literals never become a variant: social
/// entries and suggestions carrying one are treated as absent, enterprise
/// entries carrying one fail to decode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IdentityProviderKind {
    Microsoft,
    Google,
    Facebook,
    Linkedin,
    Slack,
    Twitter,
    Github,
    Okta,
    Quickbooks,
    Onelogin,
    Apple,
    Basecamp,
    Dropbox,
    Fitbit,
    Planningcenter,
    Twitch,
    Amazon,
}

impl IdentityProviderKind {
    /// Returns the wire literal for this kind.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parses a wire literal, returning `None` for unknown values.
    pub fn from_literal(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

/// A social identity provider enabled for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider {
    pub kind: IdentityProviderKind,
}

/// An identity provider configured for one organization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EnterpriseProvider {
    /// Display name of the provider.
    pub name: String,
    /// Opaque identifier, passed back as `identity_provider_id` when logging in.
    pub identity_provider_id: String,
    /// Kind of the underlying identity provider.
    #[serde(rename = "type")]
    pub kind: IdentityProviderKind,
}

/// Providers available to the application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderData {
    /// Social providers, in service order.
    pub social_providers: Vec<Provider>,
    /// Enterprise providers, in service order.
    pub enterprise_providers: Vec<EnterpriseProvider>,
    /// Provider suggested for the email address passed to `get_providers`.
    pub suggested_provider: Option<IdentityProviderKind>,
}
