mod cli;
mod commands;
mod error;
mod output;

use std::sync::Arc;

use clap::Parser;
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;

use oculus_core::{BridgeClient, LifxBridge, LightState};

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // stdout carries command output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need the bridge
        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "oculus", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let config = oculus_config::load_config()?;
            let mut client_config = config.to_client_config()?;
            if let Some(token) = cli.global.token.as_ref().filter(|t| !t.is_empty()) {
                client_config.token = Some(SecretString::from(token.clone()));
            }

            let bridge = LifxBridge::from_config(&client_config)?;
            let store = LightState::new(Arc::new(BridgeClient::new(bridge)));

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &store, &config, &cli.global).await
        }
    }
}
