// In-memory bridge for store, client, and loader tests.

use std::sync::{Arc, Mutex, PoisonError};

use oculus_api::Error;
use secrecy::SecretString;
use tokio::sync::Notify;

use crate::bridge::{BridgeCommand, CommandBridge};
use crate::client::BridgeClient;
use crate::model::{Account, Color, Light, LightStatePayload, Power, Scene};
use crate::store::LightState;

pub(crate) fn light(id: &str, label: &str, power: Power) -> Light {
    Light {
        id: id.into(),
        label: label.into(),
        power,
        brightness: 1.0,
        color: Color {
            hue: 30.0,
            saturation: 0.2,
            kelvin: 3500,
        },
        connected: true,
    }
}

pub(crate) fn scene(uuid: &str, name: &str) -> Scene {
    Scene {
        uuid: uuid.into(),
        name: name.into(),
        account: Account {
            uuid: "acct-1".into(),
        },
    }
}

/// Holds `get_lights` open until the test releases it.
#[derive(Default)]
pub(crate) struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

/// Scripted responses; `Err(status)` becomes `Error::Api { status, .. }`.
pub(crate) struct ScriptedBridge {
    lights: Mutex<Result<Vec<Light>, u16>>,
    scenes: Mutex<Result<Vec<Scene>, u16>>,
    gate: Mutex<Option<Arc<Gate>>>,
    calls: Mutex<Vec<BridgeCommand>>,
}

impl ScriptedBridge {
    pub(crate) fn new() -> Self {
        Self {
            lights: Mutex::new(Ok(Vec::new())),
            scenes: Mutex::new(Ok(Vec::new())),
            gate: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_lights(self, lights: Vec<Light>) -> Self {
        self.set_lights(Ok(lights));
        self
    }

    pub(crate) fn with_scenes(self, scenes: Vec<Scene>) -> Self {
        *lock(&self.scenes) = Ok(scenes);
        self
    }

    pub(crate) fn failing_lights(self, status: u16) -> Self {
        self.set_lights(Err(status));
        self
    }

    pub(crate) fn set_lights(&self, lights: Result<Vec<Light>, u16>) {
        *lock(&self.lights) = lights;
    }

    pub(crate) fn set_scenes(&self, scenes: Result<Vec<Scene>, u16>) {
        *lock(&self.scenes) = scenes;
    }

    /// Subsequent `get_lights` calls wait on the gate.
    pub(crate) fn arm(&self, gate: Arc<Gate>) {
        *lock(&self.gate) = Some(gate);
    }

    pub(crate) fn calls(&self) -> Vec<BridgeCommand> {
        lock(&self.calls).clone()
    }

    pub(crate) fn count(&self, command: BridgeCommand) -> usize {
        lock(&self.calls).iter().filter(|c| **c == command).count()
    }

    fn record(&self, command: BridgeCommand) {
        lock(&self.calls).push(command);
    }
}

impl CommandBridge for ScriptedBridge {
    async fn set_api_token(&self, _token: SecretString) -> Result<(), Error> {
        self.record(BridgeCommand::SetApiToken);
        Ok(())
    }

    async fn get_lights(&self) -> Result<Vec<Light>, Error> {
        self.record(BridgeCommand::GetLights);
        let gate = lock(&self.gate).clone();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
        let scripted = lock(&self.lights).clone();
        scripted.map_err(scripted_error)
    }

    async fn set_light_state(
        &self,
        _selector: &str,
        _payload: &LightStatePayload,
    ) -> Result<(), Error> {
        self.record(BridgeCommand::SetLightState);
        Ok(())
    }

    async fn toggle_light(&self, _selector: &str) -> Result<(), Error> {
        self.record(BridgeCommand::ToggleLight);
        Ok(())
    }

    async fn get_scenes(&self) -> Result<Vec<Scene>, Error> {
        self.record(BridgeCommand::GetScenes);
        let scripted = lock(&self.scenes).clone();
        scripted.map_err(scripted_error)
    }

    async fn activate_scene(&self, _uuid: &str) -> Result<(), Error> {
        self.record(BridgeCommand::ActivateScene);
        Ok(())
    }
}

pub(crate) fn store_with(bridge: ScriptedBridge) -> LightState<ScriptedBridge> {
    LightState::new(Arc::new(BridgeClient::new(bridge)))
}

fn scripted_error(status: u16) -> Error {
    Error::Api {
        status,
        body: "scripted failure".into(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
