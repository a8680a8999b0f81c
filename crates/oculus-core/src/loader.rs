// ── Route loader ──
//
// Resolves a light for a detail view: cached copy first, a fresh fetch
// for deep links. A miss never warms the store.

use tracing::debug;

use crate::bridge::CommandBridge;
use crate::error::CoreError;
use crate::model::Light;
use crate::store::LightState;

/// Find the light with `id`.
///
/// Returns the cached light without touching the bridge when present.
/// Otherwise fetches the full list once and scans it; no match is a
/// terminal [`CoreError::LightNotFound`].
pub async fn load_light<B: CommandBridge>(
    store: &LightState<B>,
    id: &str,
) -> Result<Light, CoreError> {
    if let Some(light) = store.get_light(id) {
        debug!(id, "light served from store");
        return Ok(light);
    }

    debug!(id, "light not cached, fetching");
    let lights = store.client().get_lights().await?;

    lights
        .into_iter()
        .find(|l| l.id == id)
        .ok_or_else(|| CoreError::LightNotFound { id: id.to_owned() })
}
