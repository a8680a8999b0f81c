// ── Light state store ──
//
// One watch channel carries the whole record, so every observer sees
// lights, scenes, and flags change together.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::debug;

use crate::bridge::CommandBridge;
use crate::client::BridgeClient;
use crate::model::{Light, LightUpdate, Scene};
use crate::stream::StateStream;

/// Everything a presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateSnapshot {
    pub lights: Arc<Vec<Light>>,
    pub scenes: Arc<Vec<Scene>>,
    /// Only raised while the very first data is being fetched.
    pub loading: bool,
    pub error: Option<String>,
    /// `None` until the first successful refresh.
    pub last_updated: Option<DateTime<Utc>>,
}

impl StateSnapshot {
    /// First cached light with this id.
    pub fn light(&self, id: &str) -> Option<&Light> {
        self.lights.iter().find(|l| l.id == id)
    }
}

/// Reactive cache of the latest lights and scenes.
///
/// Created empty, replaced wholesale by [`refresh()`](Self::refresh),
/// patched in place by [`update_light()`](Self::update_light).
pub struct LightState<B> {
    pub(super) client: Arc<BridgeClient<B>>,
    pub(super) state: watch::Sender<StateSnapshot>,
}

impl<B: CommandBridge> LightState<B> {
    pub fn new(client: Arc<BridgeClient<B>>) -> Self {
        let (state, _) = watch::channel(StateSnapshot::default());
        Self { client, state }
    }

    pub fn client(&self) -> &Arc<BridgeClient<B>> {
        &self.client
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn snapshot(&self) -> StateSnapshot {
        self.state.borrow().clone()
    }

    pub fn lights(&self) -> Arc<Vec<Light>> {
        Arc::clone(&self.state.borrow().lights)
    }

    pub fn scenes(&self) -> Arc<Vec<Scene>> {
        Arc::clone(&self.state.borrow().scenes)
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.state.borrow().last_updated
    }

    pub fn subscribe(&self) -> StateStream {
        StateStream::new(self.state.subscribe())
    }

    // ── Lookups & optimistic updates ─────────────────────────────────

    /// First cached light whose id matches, or `None`. Never fetches.
    pub fn get_light(&self, id: &str) -> Option<Light> {
        self.state.borrow().light(id).cloned()
    }

    /// Merge `update` into the cached light with this id, in place.
    ///
    /// Returns `false` (and notifies nobody) when the id is not cached.
    /// Nothing is rolled back if the remote call this anticipates fails;
    /// the next refresh reconciles.
    pub fn update_light(&self, id: &str, update: &LightUpdate) -> bool {
        let patched = self.state.send_if_modified(|state| {
            let Some(index) = state.lights.iter().position(|l| l.id == id) else {
                return false;
            };
            match Arc::make_mut(&mut state.lights).get_mut(index) {
                Some(light) => {
                    update.apply(light);
                    true
                }
                None => false,
            }
        });

        if patched {
            debug!(id, "optimistic light update applied");
        }
        patched
    }
}

impl<B> std::fmt::Debug for LightState<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("LightState")
            .field("lights", &state.lights.len())
            .field("scenes", &state.scenes.len())
            .field("loading", &state.loading)
            .field("error", &state.error)
            .field("last_updated", &state.last_updated)
            .finish_non_exhaustive()
    }
}
