// ── Command Bridge Client ──
//
// One function per bridge command. Each awaits the command once, logs a
// single success or failure line, and returns the bridge's result as-is.

use std::fmt::Display;

use oculus_api::Error;
use secrecy::SecretString;
use tracing::{error, info};

use crate::bridge::{BridgeCommand, CommandBridge};
use crate::model::{Light, LightStatePayload, Scene};

/// Logging front door to a [`CommandBridge`].
///
/// No retries, no timeouts of its own, no error translation.
#[derive(Debug)]
pub struct BridgeClient<B> {
    bridge: B,
}

impl<B: CommandBridge> BridgeClient<B> {
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    pub async fn set_api_token(&self, token: SecretString) -> Result<(), Error> {
        let result = self.bridge.set_api_token(token).await;
        report(BridgeCommand::SetApiToken, "set API token", result, |()| {
            "API token set".into()
        })
    }

    pub async fn get_lights(&self) -> Result<Vec<Light>, Error> {
        let result = self.bridge.get_lights().await;
        report(BridgeCommand::GetLights, "get lights", result, |lights| {
            format!("Fetched {} lights", lights.len())
        })
    }

    /// `selector` is passed through as-is; the bridge decides what is valid.
    pub async fn set_light_state(
        &self,
        selector: &str,
        payload: &LightStatePayload,
    ) -> Result<(), Error> {
        let result = self.bridge.set_light_state(selector, payload).await;
        report(BridgeCommand::SetLightState, "set light state", result, |()| {
            let body = serde_json::to_string(payload).unwrap_or_default();
            format!("Set state for {selector}: {body}")
        })
    }

    pub async fn toggle_light(&self, selector: &str) -> Result<(), Error> {
        let result = self.bridge.toggle_light(selector).await;
        report(BridgeCommand::ToggleLight, "toggle light", result, |()| {
            format!("Toggled light {selector}")
        })
    }

    pub async fn get_scenes(&self) -> Result<Vec<Scene>, Error> {
        let result = self.bridge.get_scenes().await;
        report(BridgeCommand::GetScenes, "get scenes", result, |scenes| {
            format!("Fetched {} scenes", scenes.len())
        })
    }

    pub async fn activate_scene(&self, uuid: &str) -> Result<(), Error> {
        let result = self.bridge.activate_scene(uuid).await;
        report(BridgeCommand::ActivateScene, "activate scene", result, |()| {
            format!("Activated scene {uuid}")
        })
    }
}

fn report<T, E: Display>(
    command: BridgeCommand,
    action: &str,
    result: Result<T, E>,
    success: impl FnOnce(&T) -> String,
) -> Result<T, E> {
    match result {
        Ok(value) => {
            info!(%command, "{}", success(&value));
            Ok(value)
        }
        Err(e) => {
            error!(%command, "Failed to {action}: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Power;
    use crate::test_support::{ScriptedBridge, light, scene};

    #[tokio::test]
    async fn successful_calls_return_bridge_data() {
        let bridge = ScriptedBridge::new()
            .with_lights(vec![light("a", "Desk", Power::On), light("b", "Hall", Power::Off)])
            .with_scenes(vec![scene("s1", "Evening")]);
        let client = BridgeClient::new(bridge);

        assert_eq!(client.get_lights().await.unwrap().len(), 2);
        assert_eq!(client.get_scenes().await.unwrap()[0].name, "Evening");
        client.toggle_light("id:a").await.unwrap();
        client
            .set_light_state("all", &LightStatePayload::power(Power::Off))
            .await
            .unwrap();
        client.activate_scene("s1").await.unwrap();
        client
            .set_api_token(SecretString::from("t".to_string()))
            .await
            .unwrap();

        assert_eq!(
            client.bridge().calls(),
            vec![
                BridgeCommand::GetLights,
                BridgeCommand::GetScenes,
                BridgeCommand::ToggleLight,
                BridgeCommand::SetLightState,
                BridgeCommand::ActivateScene,
                BridgeCommand::SetApiToken,
            ]
        );
    }

    #[tokio::test]
    async fn failures_pass_through_unchanged() {
        let client = BridgeClient::new(ScriptedBridge::new().failing_lights(503));

        let err = client.get_lights().await.unwrap_err();
        match err {
            Error::Api { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "scripted failure");
            }
            other => panic!("expected the bridge's Api error, got: {other:?}"),
        }
        assert_eq!(client.bridge().calls(), vec![BridgeCommand::GetLights]);
    }
}
