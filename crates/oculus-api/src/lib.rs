// oculus-api: Async Rust client for the LIFX HTTP API

pub mod error;
pub mod lifx;
pub mod models;
pub mod selector;
pub mod transport;

pub use error::Error;
pub use lifx::{DEFAULT_BASE_URL, LifxClient};
pub use models::{Account, Color, Light, LightStatePayload, Power, Scene};
pub use selector::validate_selector;
pub use transport::TransportConfig;
