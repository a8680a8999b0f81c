//! Configuration for oculus.
//!
//! TOML config file, `OCULUS_*` environment overrides, API token
//! resolution (env + plaintext, with the keyring consulted lazily by the
//! bridge), and translation to `oculus_core::ClientConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use oculus_core::{ClientConfig, KeyringEntry};

/// Conventional env var for a LIFX personal access token.
pub const TOKEN_ENV: &str = "LIFX_TOKEN";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// LIFX API root.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Seconds between background refreshes in `oculus watch`.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,

    /// API token (plaintext; prefer the keyring or an env var).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    /// Name of an environment variable holding the API token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token_env: Option<String>,

    #[serde(default)]
    pub keyring: KeyringSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
            refresh_interval: default_refresh_interval(),
            api_token: None,
            api_token_env: None,
            keyring: KeyringSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KeyringSettings {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_service")]
    pub service: String,

    #[serde(default = "default_account")]
    pub account: String,
}

impl Default for KeyringSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            service: default_service(),
            account: default_account(),
        }
    }
}

fn default_api_url() -> String {
    oculus_core::ClientConfig::default().api_url.to_string()
}
fn default_timeout() -> u64 {
    30
}
fn default_refresh_interval() -> u64 {
    5
}
fn default_true() -> bool {
    true
}
fn default_service() -> String {
    KeyringEntry::default().service
}
fn default_account() -> String {
    KeyringEntry::default().account
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "oculus", "oculus").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("oculus");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file; a missing file yields defaults + env.
///
/// Nested keys use a double underscore: `OCULUS_KEYRING__ENABLED=false`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("OCULUS_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if loading fails.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`, creating parent dirs.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Token resolution ────────────────────────────────────────────────

/// Token that should win over the keyring: the configured env var, then
/// `LIFX_TOKEN`. Empty values are ignored.
pub fn resolve_env_token(cfg: &Config) -> Option<SecretString> {
    cfg.api_token_env
        .as_deref()
        .into_iter()
        .chain(std::iter::once(TOKEN_ENV))
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
        .map(SecretString::from)
}

/// Plaintext token from the config file, used only if the keyring has none.
pub fn plaintext_token(cfg: &Config) -> Option<SecretString> {
    cfg.api_token
        .as_ref()
        .filter(|t| !t.is_empty())
        .map(|t| SecretString::from(t.clone()))
}

// ── Translation ─────────────────────────────────────────────────────

impl Config {
    /// Build the runtime `ClientConfig` described by this file.
    pub fn to_client_config(&self) -> Result<ClientConfig, ConfigError> {
        let api_url: url::Url = self.api_url.parse().map_err(|_| ConfigError::Validation {
            field: "api_url".into(),
            reason: format!("invalid URL: {}", self.api_url),
        })?;

        if !matches!(api_url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", api_url.scheme()),
            });
        }

        if self.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let keyring = self.keyring.enabled.then(|| KeyringEntry {
            service: self.keyring.service.clone(),
            account: self.keyring.account.clone(),
        });

        Ok(ClientConfig {
            api_url,
            timeout: Duration::from_secs(self.timeout),
            keyring,
            token: resolve_env_token(self),
            fallback_token: plaintext_token(self),
        })
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval.max(1))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let cfg = load_config_from(Path::new("absent.toml")).map_err(|e| e.to_string())?;
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.api_url, "https://api.lifx.com/v1/");
            Ok(())
        });
    }

    #[test]
    fn file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.toml",
                r#"
                    api_url = "http://localhost:9000/v1/"
                    timeout = 10
                    [keyring]
                    service = "oculus-test"
                "#,
            )?;
            jail.set_env("OCULUS_TIMEOUT", "3");
            jail.set_env("OCULUS_KEYRING__ENABLED", "false");

            let cfg = load_config_from(Path::new("config.toml")).map_err(|e| e.to_string())?;

            assert_eq!(cfg.api_url, "http://localhost:9000/v1/");
            assert_eq!(cfg.timeout, 3);
            assert!(!cfg.keyring.enabled);
            assert_eq!(cfg.keyring.service, "oculus-test");
            assert_eq!(cfg.keyring.account, "lifx_api_token");
            Ok(())
        });
    }

    #[test]
    fn env_token_beats_plaintext() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("MY_LIFX", "from-env");
            let cfg = Config {
                api_token: Some("from-file".into()),
                api_token_env: Some("MY_LIFX".into()),
                ..Config::default()
            };

            let client = cfg.to_client_config().map_err(|e| e.to_string())?;
            assert_eq!(client.token.unwrap().expose_secret(), "from-env");
            assert_eq!(client.fallback_token.unwrap().expose_secret(), "from-file");
            Ok(())
        });
    }

    #[test]
    fn lifx_token_env_is_the_default_source() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env(TOKEN_ENV, "c0ffee");
            let token = resolve_env_token(&Config::default()).unwrap();
            assert_eq!(token.expose_secret(), "c0ffee");
            Ok(())
        });
    }

    #[test]
    fn invalid_url_is_rejected() {
        let cfg = Config {
            api_url: "not a url".into(),
            ..Config::default()
        };
        assert!(matches!(
            cfg.to_client_config(),
            Err(ConfigError::Validation { ref field, .. }) if field == "api_url"
        ));

        let cfg = Config {
            api_url: "ftp://example.com/".into(),
            ..Config::default()
        };
        assert!(cfg.to_client_config().is_err());
    }

    #[test]
    fn disabled_keyring_keeps_tokens_in_memory() {
        let cfg = Config {
            keyring: KeyringSettings {
                enabled: false,
                ..KeyringSettings::default()
            },
            ..Config::default()
        };
        assert!(cfg.to_client_config().unwrap().keyring.is_none());
    }

    #[test]
    fn save_and_reload() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let path = jail.directory().join("nested/config.toml");
            let cfg = Config {
                refresh_interval: 12,
                ..Config::default()
            };
            save_config_to(&cfg, &path).map_err(|e| e.to_string())?;

            let loaded = load_config_from(&path).map_err(|e| e.to_string())?;
            assert_eq!(loaded, cfg);
            assert_eq!(loaded.refresh_interval(), Duration::from_secs(12));
            Ok(())
        });
    }
}
