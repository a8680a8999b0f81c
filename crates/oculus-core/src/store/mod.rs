// ── Reactive light store ──
//
// Latest lights and scenes for UI consumption, with push-based change
// notification through a `watch` channel.

mod light_state;
mod refresh;

pub use light_state::{LightState, StateSnapshot};
pub use refresh::REFRESH_FAILED;
