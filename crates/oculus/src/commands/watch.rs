//! `oculus watch`: background polling against the store.
//!
//! The first refresh shows the loading spinner; later ones run silently
//! behind the cached table and only reprint when the lights change. A
//! failed poll keeps the last good table on screen.

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use owo_colors::OwoColorize;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use oculus_config::Config;
use oculus_core::Light;

use crate::cli::{GlobalOpts, WatchArgs};
use crate::error::CliError;
use crate::output;

use super::{Store, lights, util};

pub async fn handle(
    store: &Store,
    args: WatchArgs,
    config: &Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let interval = args
        .interval
        .map_or_else(|| config.refresh_interval(), |s| Duration::from_secs(s.max(1)));
    let color = output::should_color(global.color_mode);

    // Nothing to show until the first fetch succeeds.
    util::refresh(store, global).await?;
    let mut shown = store.lights();
    print_lights(&shown, color, global)?;

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            _ = ticker.tick() => {}
        }

        if let Err(e) = util::refresh(store, global).await {
            output::status(&format!("Refresh failed, showing cached data: {e}"), global.quiet);
            continue;
        }

        let latest = store.lights();
        if Arc::ptr_eq(&latest, &shown) || latest == shown {
            debug!("lights unchanged");
            continue;
        }
        print_lights(&latest, color, global)?;
        shown = latest;
    }

    Ok(())
}

fn print_lights(lights: &[Light], color: bool, global: &GlobalOpts) -> Result<(), CliError> {
    let on = lights.iter().filter(|l| l.power.is_on()).count();
    let stamp = format!("{} -- {on}/{} on", Local::now().format("%H:%M:%S"), lights.len());
    if color {
        output::status(&stamp.cyan().to_string(), global.quiet);
    } else {
        output::status(&stamp, global.quiet);
    }
    output::print_output(&lights::render_lights(lights, global)?, global.quiet);
    Ok(())
}
