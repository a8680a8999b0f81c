// ── Runtime client configuration ──
//
// Describes where the LIFX API lives and where the token comes from.
// Never touches disk; `oculus-config` builds one from the config file.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::bridge::KeyringEntry;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// LIFX API root (e.g. `https://api.lifx.com/v1/`).
    pub api_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// OS keyring entry holding the token. `None` keeps tokens in memory only.
    pub keyring: Option<KeyringEntry>,
    /// Token that takes precedence over the keyring (CLI flag, env var).
    pub token: Option<SecretString>,
    /// Token used only when the keyring has none (plaintext config).
    pub fallback_token: Option<SecretString>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: oculus_api::DEFAULT_BASE_URL
                .parse()
                .expect("default LIFX URL is valid"),
            timeout: Duration::from_secs(30),
            keyring: Some(KeyringEntry::default()),
            token: None,
            fallback_token: None,
        }
    }
}
