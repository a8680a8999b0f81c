//! Command dispatch: bridges CLI args -> store / bridge calls -> output.

pub mod config_cmd;
pub mod lights;
pub mod scenes;
pub mod token;
pub mod util;
pub mod watch;

use oculus_config::Config;
use oculus_core::{LifxBridge, LightState};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// The store every bridge-bound command works against.
pub type Store = LightState<LifxBridge>;

/// Dispatch a bridge-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    store: &Store,
    config: &Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Lights(args) => lights::handle(store, args, global).await,
        Command::Scenes(args) => scenes::handle(store, args, global).await,
        Command::Watch(args) => watch::handle(store, args, config, global).await,
        Command::Token(args) => token::handle(store, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Err(CliError::Internal(
            "command does not use the LIFX bridge".into(),
        )),
    }
}
