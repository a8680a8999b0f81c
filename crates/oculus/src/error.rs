//! CLI error types with miette diagnostics.
//!
//! Maps bridge, core, and config errors into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use oculus_config::ConfigError;
use oculus_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the LIFX API")]
    #[diagnostic(
        code(oculus::connection_failed),
        help("Check your network connection and the `api_url` setting.\nCause: {reason}")
    )]
    ConnectionFailed { reason: String },

    // ── Authentication ───────────────────────────────────────────────

    #[error("No LIFX API token configured")]
    #[diagnostic(
        code(oculus::no_token),
        help(
            "Store one with: oculus token set\n\
             Or export LIFX_TOKEN / pass --token."
        )
    )]
    NoToken,

    #[error("LIFX rejected the API token (HTTP {status})")]
    #[diagnostic(
        code(oculus::auth_failed),
        help(
            "Generate a new token at https://cloud.lifx.com/settings\n\
             Then run: oculus token set"
        )
    )]
    AuthFailed { status: u16 },

    #[error("Credential store error: {message}")]
    #[diagnostic(
        code(oculus::keyring),
        help("Disable the keyring with OCULUS_KEYRING__ENABLED=false and use LIFX_TOKEN instead.")
    )]
    Credential { message: String },

    // ── Resources ────────────────────────────────────────────────────

    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(oculus::not_found),
        help("Run: oculus {list_command} to see available {resource_type}s")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────

    #[error("LIFX API error (HTTP {status}): {body}")]
    #[diagnostic(code(oculus::api_error))]
    ApiError { status: u16, body: String },

    #[error("Unexpected response from LIFX: {message}")]
    #[diagnostic(code(oculus::bad_response))]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid selector: {selector}")]
    #[diagnostic(
        code(oculus::invalid_selector),
        help("Use all, a light id, or id:/group:/label:/location: followed by a value.")
    )]
    InvalidSelector { selector: String },

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(oculus::validation))]
    Validation { field: String, reason: String },

    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(oculus::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error(transparent)]
    #[diagnostic(
        code(oculus::config),
        help("Check the config file (see: oculus config path) and OCULUS_* variables.")
    )]
    Config(#[from] ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::NoToken | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::ApiError { status: 404, .. } => exit_code::NOT_FOUND,
            Self::InvalidSelector { .. }
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── Bridge / core errors → CliError ──────────────────────────────────

impl From<oculus_api::Error> for CliError {
    fn from(err: oculus_api::Error) -> Self {
        use oculus_api::Error;

        match err {
            err if err.is_connection() => Self::ConnectionFailed {
                reason: err.to_string(),
            },
            Error::MissingToken => Self::NoToken,
            Error::Unauthorized { status } => Self::AuthFailed { status },
            Error::Credential(message) => Self::Credential { message },
            Error::InvalidSelector(selector) => Self::InvalidSelector { selector },
            // LIFX answered, but the body could not be read or decoded.
            Error::Transport(e) => Self::BadResponse {
                message: e.to_string(),
            },
            Error::InvalidUrl(e) => Self::Validation {
                field: "api_url".into(),
                reason: e.to_string(),
            },
            Error::ClientBuild(message) => Self::Internal(message),
            Error::Api { status, body } => Self::ApiError { status, body },
            Error::Deserialization { message, .. } => Self::BadResponse { message },
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Bridge(e) => e.into(),
            CoreError::LightNotFound { id } => Self::NotFound {
                resource_type: "light".into(),
                identifier: id,
                list_command: "lights list".into(),
            },
        }
    }
}
