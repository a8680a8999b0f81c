// ── Domain model ──
//
// Lights and scenes are used as LIFX returns them. `LightUpdate` is the
// partial-light patch applied by optimistic updates.

pub use oculus_api::models::{Account, Color, Light, LightStatePayload, Power, Scene};

/// A partial `Light`: every `Some` field overwrites the cached value.
///
/// The id is deliberately absent; a patch never moves a light.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightUpdate {
    pub label: Option<String>,
    pub power: Option<Power>,
    pub brightness: Option<f64>,
    pub color: Option<Color>,
    pub connected: Option<bool>,
}

impl LightUpdate {
    pub fn power(power: Power) -> Self {
        Self {
            power: Some(power),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none()
            && self.power.is_none()
            && self.brightness.is_none()
            && self.color.is_none()
            && self.connected.is_none()
    }

    /// Merge this patch into `light`.
    pub fn apply(&self, light: &mut Light) {
        if let Some(ref label) = self.label {
            light.label.clone_from(label);
        }
        if let Some(power) = self.power {
            light.power = power;
        }
        if let Some(brightness) = self.brightness {
            light.brightness = brightness;
        }
        if let Some(color) = self.color {
            light.color = color;
        }
        if let Some(connected) = self.connected {
            light.connected = connected;
        }
    }
}

/// The locally predictable part of a state change. Color descriptors are
/// free-form LIFX strings, so they are left for the next refresh to settle.
impl From<&LightStatePayload> for LightUpdate {
    fn from(payload: &LightStatePayload) -> Self {
        Self {
            power: payload.power,
            brightness: payload.brightness,
            ..Self::default()
        }
    }
}
