// ── Refresh ──
//
// Stale-while-revalidate: with data on screen the fetch runs silently;
// with nothing cached the loading flag is raised for its duration.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, error};

use super::LightState;
use crate::bridge::CommandBridge;
use crate::error::CoreError;

/// The only error text the store ever exposes.
pub const REFRESH_FAILED: &str = "Failed to load data";

impl<B: CommandBridge> LightState<B> {
    /// Fetch lights and scenes in parallel and replace the cached lists.
    ///
    /// On failure the cached data stays as it was and `error` is set to
    /// [`REFRESH_FAILED`]; the returned error carries the bridge's cause.
    /// Concurrent refreshes are not coordinated: the last to finish wins.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        // Decided once; a refresh that starts with data never shows loading.
        let show_loading = self.state.borrow().lights.is_empty();

        self.state.send_modify(|state| {
            if show_loading {
                state.loading = true;
            }
            state.error = None;
        });
        debug!(show_loading, "refreshing lights and scenes");

        let result = tokio::try_join!(self.client.get_lights(), self.client.get_scenes());

        match result {
            Ok((lights, scenes)) => {
                self.state.send_modify(|state| {
                    state.lights = Arc::new(lights);
                    state.scenes = Arc::new(scenes);
                    let now = Utc::now();
                    // Strictly increasing even if the wall clock stalls or steps back.
                    state.last_updated = Some(match state.last_updated {
                        Some(prev) if now <= prev => prev + Duration::microseconds(1),
                        _ => now,
                    });
                    if show_loading {
                        state.loading = false;
                    }
                });
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to refresh data");
                self.state.send_modify(|state| {
                    state.error = Some(REFRESH_FAILED.into());
                    if show_loading {
                        state.loading = false;
                    }
                });
                Err(e.into())
            }
        }
    }
}
