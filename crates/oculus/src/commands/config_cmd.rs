//! Config subcommand handlers.

use dialoguer::{Input, Select};
use secrecy::SecretString;

use oculus_config::{self as config, Config};
use oculus_core::{KeyringEntry, TokenStore};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

const REDACTED: &str = "********";

/// Copy of `cfg` safe to print.
fn redacted(cfg: &Config) -> Config {
    Config {
        api_token: cfg.api_token.as_ref().map(|_| REDACTED.into()),
        ..cfg.clone()
    }
}

fn show(cfg: &Config, format: OutputFormat) -> Result<String, CliError> {
    let cfg = redacted(cfg);
    Ok(match format {
        OutputFormat::Table | OutputFormat::Plain => toml::to_string_pretty(&cfg)
            .map_err(|e| CliError::Config(config::ConfigError::Serialization(e)))?,
        OutputFormat::Json => serde_json::to_string_pretty(&cfg)?,
        OutputFormat::JsonCompact => serde_json::to_string(&cfg)?,
    })
}

fn init(global: &GlobalOpts) -> Result<(), CliError> {
    let path = config::config_path();
    eprintln!("oculus -- configuration wizard");
    eprintln!("   Config path: {}\n", path.display());

    let mut cfg = config::load_config_or_default();

    cfg.api_url = Input::new()
        .with_prompt("LIFX API URL")
        .default(cfg.api_url.clone())
        .interact_text()
        .map_err(prompt_err)?;

    let token = rpassword::prompt_password("LIFX API token (blank to skip): ")
        .map_err(prompt_err)?;
    let token = token.trim().to_owned();

    if !token.is_empty() {
        let choices = &[
            "Store in system keyring (recommended)",
            "Save to config file (plaintext)",
        ];
        let selection = Select::new()
            .with_prompt("Where to store the API token?")
            .items(choices)
            .default(0)
            .interact()
            .map_err(prompt_err)?;

        if selection == 0 {
            let entry = KeyringEntry {
                service: cfg.keyring.service.clone(),
                account: cfg.keyring.account.clone(),
            };
            TokenStore::with_keyring(entry).set(SecretString::from(token))?;
            cfg.keyring.enabled = true;
            cfg.api_token = None;
            eprintln!("   API token stored in system keyring");
        } else {
            cfg.api_token = Some(token);
        }
    }

    cfg.to_client_config()?;
    config::save_config_to(&cfg, &path)?;
    output::status(&format!("Configuration saved to {}", path.display()), global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => init(global),

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            output::print_output(&show(&cfg, global.output)?, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
