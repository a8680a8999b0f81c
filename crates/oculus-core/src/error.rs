// ── Core error types ──
//
// Bridge failures pass through verbatim: the client layer logs and
// re-raises whatever the bridge produced. Only conditions the core itself
// detects get their own variants.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A bridge command failed. Carries the original error unchanged.
    #[error(transparent)]
    Bridge(#[from] oculus_api::Error),

    /// The route loader found no light with this id, even after a fresh fetch.
    #[error("Light not found: {id}")]
    LightNotFound { id: String },
}

impl CoreError {
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::LightNotFound { .. } => true,
            Self::Bridge(e) => e.is_not_found(),
        }
    }

    /// HTTP-equivalent status for navigation layers (404 for a missing light).
    pub fn status_code(&self) -> u16 {
        match self {
            Self::LightNotFound { .. } => 404,
            Self::Bridge(
                oculus_api::Error::Unauthorized { status } | oculus_api::Error::Api { status, .. },
            ) => *status,
            Self::Bridge(oculus_api::Error::MissingToken) => 401,
            Self::Bridge(oculus_api::Error::InvalidSelector(_)) => 400,
            Self::Bridge(_) => 500,
        }
    }
}
