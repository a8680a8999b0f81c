// ── Command bridge ──
//
// The remote command surface the rest of the app talks to. Each method is
// one named command; implementations decide how it reaches LIFX.

mod lifx;
mod token;

use std::future::Future;

use oculus_api::Error;
use secrecy::SecretString;
use strum::{Display, IntoStaticStr};

use crate::model::{Light, LightStatePayload, Scene};

pub use lifx::LifxBridge;
pub use token::{KeyringEntry, TokenStore};

/// Names of the bridge commands, as they appear in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum BridgeCommand {
    SetApiToken,
    GetLights,
    SetLightState,
    ToggleLight,
    GetScenes,
    ActivateScene,
}

/// One async method per remote command.
///
/// Errors are the bridge's own; callers above this layer never translate them.
pub trait CommandBridge: Send + Sync {
    /// `set_api_token {token}`. An empty token clears the stored one.
    fn set_api_token(&self, token: SecretString) -> impl Future<Output = Result<(), Error>> + Send;

    /// `get_lights {}`
    fn get_lights(&self) -> impl Future<Output = Result<Vec<Light>, Error>> + Send;

    /// `set_light_state {selector, payload}`
    fn set_light_state(
        &self,
        selector: &str,
        payload: &LightStatePayload,
    ) -> impl Future<Output = Result<(), Error>> + Send;

    /// `toggle_light {selector}`
    fn toggle_light(&self, selector: &str) -> impl Future<Output = Result<(), Error>> + Send;

    /// `get_scenes {}`
    fn get_scenes(&self) -> impl Future<Output = Result<Vec<Scene>, Error>> + Send;

    /// `activate_scene {uuid}`
    fn activate_scene(&self, uuid: &str) -> impl Future<Output = Result<(), Error>> + Send;
}
