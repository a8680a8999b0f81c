// ── Reactive state streams ──
//
// Subscription handle for consuming `LightState` changes.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use crate::store::StateSnapshot;

/// A subscription to the light store.
///
/// Provides both point-in-time snapshot access and reactive change
/// notification via `changed()` or by converting to a `Stream`.
pub struct StateStream {
    current: StateSnapshot,
    receiver: watch::Receiver<StateSnapshot>,
}

impl StateStream {
    pub(crate) fn new(receiver: watch::Receiver<StateSnapshot>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot seen at creation or at the last `changed()`.
    pub fn current(&self) -> &StateSnapshot {
        &self.current
    }

    /// The latest snapshot (may have changed since the last `changed()`).
    pub fn latest(&self) -> StateSnapshot {
        self.receiver.borrow().clone()
    }

    /// Whether the store has been modified since this handle last looked.
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }

    /// Wait for the next change, returning the new snapshot.
    /// Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<StateSnapshot> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }

    /// Convert into a `Stream` that yields the current snapshot, then one
    /// per change.
    pub fn into_stream(self) -> StateWatchStream {
        StateWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
pub struct StateWatchStream {
    inner: WatchStream<StateSnapshot>,
}

impl Stream for StateWatchStream {
    type Item = StateSnapshot;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
