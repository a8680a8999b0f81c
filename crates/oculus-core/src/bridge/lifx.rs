// Production bridge: every command resolves the token, then calls LIFX.

use oculus_api::transport::TransportConfig;
use oculus_api::{Error, LifxClient};
use secrecy::SecretString;

use super::{CommandBridge, TokenStore};
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::{Light, LightStatePayload, Scene};

#[derive(Debug)]
pub struct LifxBridge {
    client: LifxClient,
    tokens: TokenStore,
}

impl LifxBridge {
    pub fn new(client: LifxClient, tokens: TokenStore) -> Self {
        Self { client, tokens }
    }

    /// Build the HTTP client and token store described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = LifxClient::new(config.api_url.clone(), &transport)?;

        let mut tokens = match config.keyring {
            Some(ref entry) => TokenStore::with_keyring(entry.clone()),
            None => TokenStore::in_memory(),
        };
        if let Some(ref fallback) = config.fallback_token {
            tokens = tokens.with_fallback(fallback.clone());
        }
        if let Some(ref token) = config.token {
            tokens = tokens.seeded(token.clone());
        }

        Ok(Self::new(client, tokens))
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub fn client(&self) -> &LifxClient {
        &self.client
    }
}

impl CommandBridge for LifxBridge {
    async fn set_api_token(&self, token: SecretString) -> Result<(), Error> {
        self.tokens.set(token)
    }

    async fn get_lights(&self) -> Result<Vec<Light>, Error> {
        let token = self.tokens.get()?;
        self.client.list_lights(&token).await
    }

    async fn set_light_state(
        &self,
        selector: &str,
        payload: &LightStatePayload,
    ) -> Result<(), Error> {
        oculus_api::validate_selector(selector)?;
        let token = self.tokens.get()?;
        self.client.set_state(&token, selector, payload).await
    }

    async fn toggle_light(&self, selector: &str) -> Result<(), Error> {
        oculus_api::validate_selector(selector)?;
        let token = self.tokens.get()?;
        self.client.toggle_power(&token, selector).await
    }

    async fn get_scenes(&self) -> Result<Vec<Scene>, Error> {
        let token = self.tokens.get()?;
        self.client.list_scenes(&token).await
    }

    async fn activate_scene(&self, uuid: &str) -> Result<(), Error> {
        let token = self.tokens.get()?;
        self.client.activate_scene(&token, uuid).await
    }
}
