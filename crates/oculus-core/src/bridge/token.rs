// API token storage: in-memory cache in front of the OS keyring.

use std::sync::{Mutex, PoisonError};

use oculus_api::Error;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

/// Keyring coordinates of the stored token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyringEntry {
    pub service: String,
    pub account: String,
}

impl Default for KeyringEntry {
    fn default() -> Self {
        Self {
            service: "oculus".into(),
            account: "lifx_api_token".into(),
        }
    }
}

impl KeyringEntry {
    fn open(&self) -> Result<keyring::Entry, Error> {
        keyring::Entry::new(&self.service, &self.account).map_err(credential_error)
    }
}

/// Resolves the LIFX token for every bridge command.
///
/// Lookup order: memory cache, keyring (hits are cached), fallback token.
pub struct TokenStore {
    cached: Mutex<Option<SecretString>>,
    keyring: Option<KeyringEntry>,
    fallback: Option<SecretString>,
}

impl TokenStore {
    /// A store that never touches the OS keyring.
    pub fn in_memory() -> Self {
        Self {
            cached: Mutex::new(None),
            keyring: None,
            fallback: None,
        }
    }

    pub fn with_keyring(entry: KeyringEntry) -> Self {
        Self {
            keyring: Some(entry),
            ..Self::in_memory()
        }
    }

    /// Pre-load a token that wins over the keyring.
    pub fn seeded(self, token: SecretString) -> Self {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(token);
        self
    }

    /// Token to use when neither memory nor keyring has one.
    pub fn with_fallback(mut self, token: SecretString) -> Self {
        self.fallback = Some(token);
        self
    }

    /// Store a new token. An empty token clears memory and deletes the
    /// keyring credential.
    pub fn set(&self, token: SecretString) -> Result<(), Error> {
        let clear = token.expose_secret().is_empty();

        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) =
            if clear { None } else { Some(token.clone()) };

        let Some(ref entry) = self.keyring else {
            return Ok(());
        };

        let credential = entry.open()?;
        if clear {
            match credential.delete_credential() {
                Ok(()) | Err(keyring::Error::NoEntry) => {
                    debug!(service = %entry.service, "keyring token removed");
                    Ok(())
                }
                Err(e) => Err(credential_error(e)),
            }
        } else {
            credential
                .set_password(token.expose_secret())
                .map_err(credential_error)?;
            debug!(service = %entry.service, "keyring token stored");
            Ok(())
        }
    }

    pub fn get(&self) -> Result<SecretString, Error> {
        if let Some(token) = self
            .cached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Ok(token);
        }

        if let Some(ref entry) = self.keyring {
            match entry.open()?.get_password() {
                Ok(secret) => {
                    let token = SecretString::from(secret);
                    *self.cached.lock().unwrap_or_else(PoisonError::into_inner) =
                        Some(token.clone());
                    return Ok(token);
                }
                Err(keyring::Error::NoEntry) => {}
                Err(e) if self.fallback.is_some() => {
                    warn!(error = %e, "keyring unavailable, using configured token");
                }
                Err(e) => return Err(credential_error(e)),
            }
        }

        self.fallback.clone().ok_or(Error::MissingToken)
    }

    pub fn is_configured(&self) -> bool {
        self.get().is_ok()
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("keyring", &self.keyring)
            .field("fallback", &self.fallback.is_some())
            .finish_non_exhaustive()
    }
}

#[allow(clippy::needless_pass_by_value)]
fn credential_error(err: keyring::Error) -> Error {
    Error::Credential(err.to_string())
}
