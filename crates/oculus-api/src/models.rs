// LIFX wire types.
//
// Only the fields the app consumes are modelled; everything else in the
// LIFX payloads (group, location, product, ...) is ignored by serde.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Power state as reported and accepted by LIFX (`"on"` / `"off"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Power {
    On,
    Off,
}

impl Power {
    pub fn is_on(self) -> bool {
        self == Self::On
    }

    /// The opposite state, as a toggle command would leave the light.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

/// HSBK color without the brightness component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// 0–360 degrees.
    pub hue: f64,
    /// 0–1.
    pub saturation: f64,
    pub kelvin: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub id: String,
    pub label: String,
    pub power: Power,
    /// 0–1.
    pub brightness: f64,
    pub color: Color,
    pub connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub uuid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub uuid: String,
    pub name: String,
    pub account: Account,
}

/// Desired-state body for `PUT /lights/{selector}/state`.
///
/// Unset fields are left out of the request so LIFX keeps their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LightStatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<Power>,
    /// LIFX color descriptor, e.g. `"red"`, `"kelvin:3500"`, `"hue:120 saturation:1"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    /// Transition time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl LightStatePayload {
    pub fn power(power: Power) -> Self {
        Self {
            power: Some(power),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.power.is_none()
            && self.color.is_none()
            && self.brightness.is_none()
            && self.duration.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn light_ignores_unmodelled_fields() {
        let body = r#"[
            {
                "id": "d073d5000001",
                "uuid": "00000000-0000-0000-0000-000000000000",
                "label": "Kitchen",
                "connected": true,
                "power": "on",
                "color": { "hue": 0.0, "saturation": 0.0, "kelvin": 3500 },
                "brightness": 1.0,
                "effect": "off",
                "group": { "id": "12345", "name": "Kitchen" },
                "location": { "id": "67890", "name": "Home" },
                "last_seen": "2023-10-27T10:00:00Z",
                "seconds_since_seen": 0,
                "product": {
                    "name": "LIFX Color 1000",
                    "identifier": "lifx_color_1000",
                    "company": "LIFX",
                    "capabilities": { "has_color": true, "min_kelvin": 2500, "max_kelvin": 9000 }
                }
            }
        ]"#;

        let lights: Vec<Light> = serde_json::from_str(body).unwrap();
        assert_eq!(lights.len(), 1);
        assert_eq!(lights[0].label, "Kitchen");
        assert_eq!(lights[0].power, Power::On);
        assert!((lights[0].brightness - 1.0).abs() < f64::EPSILON);
        assert_eq!(lights[0].color.kelvin, 3500);
    }

    #[test]
    fn payload_omits_unset_fields() {
        let payload = LightStatePayload {
            power: Some(Power::Off),
            duration: Some(1.5),
            ..LightStatePayload::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "power": "off", "duration": 1.5 }));
    }

    #[test]
    fn power_parses_case_insensitively() {
        assert_eq!("ON".parse::<Power>().unwrap(), Power::On);
        assert_eq!("off".parse::<Power>().unwrap(), Power::Off);
        assert!("dim".parse::<Power>().is_err());
        assert_eq!(Power::On.toggled(), Power::Off);
    }
}
