//! Clap derive structures for the `oculus` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};
use oculus_core::Power;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// oculus -- control LIFX lights from the command line
#[derive(Debug, Parser)]
#[command(
    name = "oculus",
    version,
    about = "Control LIFX smart lights from the command line",
    long_about = "Lists and controls LIFX lights and scenes through the LIFX HTTP API.\n\n\
        The API token is read from --token, LIFX_TOKEN, the system keyring,\n\
        or the config file, in that order.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// LIFX API token (overrides keyring and config)
    #[arg(long, env = "OCULUS_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "OCULUS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use colored output
    #[arg(long, default_value = "auto", global = true)]
    pub color_mode: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List and control lights
    #[command(alias = "l")]
    Lights(LightsArgs),

    /// List and activate scenes
    #[command(alias = "s")]
    Scenes(ScenesArgs),

    /// Poll LIFX and reprint lights whenever they change
    Watch(WatchArgs),

    /// Store or remove the LIFX API token
    Token(TokenArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Lights ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LightsArgs {
    #[command(subcommand)]
    pub command: LightsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LightsCommand {
    /// List all lights on the account
    #[command(alias = "ls")]
    List,

    /// Show one light by id
    Get {
        /// Light id (e.g. d073d5000001)
        id: String,
    },

    /// Set power, color, or brightness on the selected lights
    Set {
        /// LIFX selector (all, id:..., group:..., location:..., label:...)
        selector: String,

        /// Power state (on or off)
        #[arg(long)]
        power: Option<Power>,

        /// LIFX color string (e.g. red, kelvin:3500, "hue:120 saturation:1")
        #[arg(long, value_name = "COLOR")]
        color: Option<String>,

        /// Brightness from 0.0 to 1.0
        #[arg(long, short = 'b')]
        brightness: Option<f64>,

        /// Transition time in seconds
        #[arg(long, short = 'd')]
        duration: Option<f64>,
    },

    /// Toggle power on the selected lights
    Toggle {
        /// LIFX selector
        selector: String,
    },

    /// Turn one light on
    On {
        /// Light id
        id: String,
    },

    /// Turn one light off
    Off {
        /// Light id
        id: String,
    },
}

// ── Scenes ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ScenesArgs {
    #[command(subcommand)]
    pub command: ScenesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScenesCommand {
    /// List scenes on the account
    #[command(alias = "ls")]
    List,

    /// Activate a scene
    Activate {
        /// Scene UUID or name
        scene: String,
    },
}

// ── Watch ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Seconds between refreshes (defaults to `refresh_interval` in config)
    #[arg(long, short = 'i')]
    pub interval: Option<u64>,
}

// ── Token ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct TokenArgs {
    #[command(subcommand)]
    pub command: TokenCommand,
}

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Store an API token (prompts when omitted)
    Set {
        /// Personal access token from cloud.lifx.com
        token: Option<String>,
    },

    /// Remove the stored API token
    Clear,

    /// Report whether a token is available
    Status,
}

// ── Config ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive setup wizard
    Init,

    /// Show the effective configuration
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
