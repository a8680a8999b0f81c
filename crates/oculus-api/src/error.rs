use thiserror::Error;

/// Top-level error type for the `oculus-api` crate.
///
/// Covers every failure mode of a bridge command: credential lookup,
/// selector validation, transport, and LIFX API responses.
/// `oculus-core` passes these through untouched.
#[derive(Debug, Error)]
pub enum Error {
    // ── Credentials ─────────────────────────────────────────────────
    /// No API token in memory, the keyring, or configuration.
    #[error("API token not configured -- set one with `oculus token set`")]
    MissingToken,

    /// The OS credential store failed (locked, unavailable, denied).
    #[error("Credential store error: {0}")]
    Credential(String),

    /// LIFX rejected the bearer token.
    #[error("LIFX rejected the API token (HTTP {status})")]
    Unauthorized { status: u16 },

    // ── Request validation ──────────────────────────────────────────
    #[error("Invalid selector format: {0}")]
    InvalidSelector(String),

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    // ── LIFX API ────────────────────────────────────────────────────
    /// Non-success status from LIFX, with the raw body for diagnostics.
    #[error("LIFX API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if configuring a (new) token might resolve this error.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::MissingToken | Self::Unauthorized { .. })
    }

    /// Returns `true` if LIFX reported the selector or scene as unknown.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status == 404,
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            _ => false,
        }
    }

    /// Returns `true` if the controller never answered (offline, DNS, timeout).
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }
}
