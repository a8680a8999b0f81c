//! Shared helpers for command handlers.

use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use oculus_core::{CommandBridge, LightState, Scene};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Refresh the store, showing a spinner for as long as it reports `loading`.
///
/// The store only raises `loading` when it has nothing cached, so repeat
/// refreshes (e.g. in `watch`) stay silent.
pub async fn refresh<B: CommandBridge>(
    store: &LightState<B>,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let show_spinner = !global.quiet
        && matches!(global.output, OutputFormat::Table)
        && std::io::stderr().is_terminal();

    let mut updates = store.subscribe();
    let refresh = store.refresh();
    tokio::pin!(refresh);

    let mut spinner: Option<ProgressBar> = None;
    let result = loop {
        tokio::select! {
            result = &mut refresh => break result,
            Some(snap) = updates.changed() => {
                match (snap.loading, spinner.as_ref()) {
                    (true, None) if show_spinner => spinner = Some(loading_spinner()),
                    (false, Some(bar)) => bar.finish_and_clear(),
                    _ => {}
                }
            }
        }
    };

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }
    result.map_err(CliError::from)
}

fn loading_spinner() -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message("Loading lights...");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

/// Resolve a scene by UUID, or by case-insensitive name.
pub fn resolve_scene<'a>(scenes: &'a [Scene], identifier: &str) -> Result<&'a Scene, CliError> {
    scenes
        .iter()
        .find(|s| s.uuid == identifier)
        .or_else(|| {
            scenes
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(identifier))
        })
        .ok_or_else(|| CliError::NotFound {
            resource_type: "scene".into(),
            identifier: identifier.into(),
            list_command: "scenes list".into(),
        })
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, action: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    if !std::io::stdin().is_terminal() {
        return Err(CliError::NonInteractiveRequiresYes {
            action: action.into(),
        });
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}
