//! Client-side state layer for controlling LIFX lights through a command bridge.
//!
//! - **[`CommandBridge`]** -- The remote command surface (`get_lights`,
//!   `set_light_state`, `activate_scene`, ...). [`LifxBridge`] implements it
//!   over the LIFX HTTP API with a keyring-backed [`TokenStore`].
//!
//! - **[`BridgeClient`]** -- Thin wrappers around each bridge command that log
//!   the outcome and hand back the bridge's result untouched.
//!
//! - **[`LightState`]** -- Reactive cache of the latest lights and scenes.
//!   [`refresh()`](LightState::refresh) fetches both in parallel and only
//!   raises the `loading` flag when there is nothing cached yet;
//!   [`update_light()`](LightState::update_light) applies optimistic patches.
//!   Consumers watch it through a [`StateStream`].
//!
//! - **[`load_light`]** -- Route loader: cached light first, fresh fetch on miss.

pub mod bridge;
pub mod client;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;
pub mod stream;

#[cfg(test)]
pub(crate) mod test_support;

// ── Primary re-exports ──────────────────────────────────────────────
pub use bridge::{BridgeCommand, CommandBridge, KeyringEntry, LifxBridge, TokenStore};
pub use client::BridgeClient;
pub use config::ClientConfig;
pub use error::CoreError;
pub use loader::load_light;
pub use store::{LightState, REFRESH_FAILED, StateSnapshot};
pub use stream::StateStream;

pub use model::{Account, Color, Light, LightStatePayload, LightUpdate, Power, Scene};
