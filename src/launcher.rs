use url::Url;

use crate::error::{Result, SsoError};

/// Opens the login redirect in a browser or other external user agent.
///
/// Implementations that must run on a UI thread are responsible for
/// dispatching there themselves.
pub trait BrowserLauncher {
    /// Opens `url`, returning once the launch was handed off.
    fn open(&self, url: &Url) -> Result<()>;
}

impl<F> BrowserLauncher for F
where
    F: Fn(&Url) -> Result<()>,
{
    fn open(&self, url: &Url) -> Result<()> {
        self(url)
    }
}

/// Launches the platform's default browser.
#[cfg(feature = "browser")]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

#[cfg(feature = "browser")]
impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &Url) -> Result<()> {
        webbrowser::open(url.as_str())
            .map_err(|e| SsoError::StartLoginFailed(format!("failed to open browser: {}", e)))
    }
}

/// Opens `url` with `launcher`, tagging failures as start-login errors.
pub(crate) fn launch<L>(launcher: &L, url: Url) -> Result<Url>
where
    L: BrowserLauncher + ?Sized,
{
    tracing::debug!(%url, "opening login redirect");
    match launcher.open(&url) {
        Ok(()) => Ok(url),
        Err(SsoError::StartLoginFailed(msg)) => Err(SsoError::StartLoginFailed(msg)),
        Err(other) => Err(SsoError::StartLoginFailed(format!(
            "failed to open browser: {}",
            other
        ))),
    }
}
