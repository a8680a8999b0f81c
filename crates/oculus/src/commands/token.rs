//! API token handlers.

use std::io::IsTerminal;

use secrecy::SecretString;

use crate::cli::{GlobalOpts, TokenArgs, TokenCommand};
use crate::error::CliError;
use crate::output;

use super::{Store, util};

pub async fn handle(
    store: &Store,
    args: TokenArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let client = store.client();

    match args.command {
        TokenCommand::Set { token } => {
            let token = match token {
                Some(token) => token,
                None if std::io::stdin().is_terminal() => {
                    rpassword::prompt_password("LIFX API token: ").map_err(util::prompt_err)?
                }
                None => {
                    return Err(CliError::Validation {
                        field: "token".into(),
                        reason: "no token given and stdin is not a terminal".into(),
                    });
                }
            };
            let token = token.trim().to_owned();
            if token.is_empty() {
                return Err(CliError::Validation {
                    field: "token".into(),
                    reason: "token cannot be empty (use `oculus token clear` to remove it)".into(),
                });
            }

            client.set_api_token(SecretString::from(token)).await?;
            output::status("API token stored", global.quiet);
            Ok(())
        }

        TokenCommand::Clear => {
            if !util::confirm("Remove the stored LIFX API token?", "token clear", global.yes)? {
                return Ok(());
            }
            client.set_api_token(SecretString::from(String::new())).await?;
            output::status("API token removed", global.quiet);
            Ok(())
        }

        TokenCommand::Status => {
            let configured = client.bridge().tokens().is_configured();
            output::print_output(
                if configured { "configured" } else { "not configured" },
                global.quiet,
            );
            if configured {
                Ok(())
            } else {
                Err(CliError::NoToken)
            }
        }
    }
}
