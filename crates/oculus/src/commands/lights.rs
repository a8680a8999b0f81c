//! Light command handlers.

use tabled::Tabled;

use oculus_core::{Light, LightStatePayload, LightUpdate, Power, load_light};

use crate::cli::{GlobalOpts, LightsArgs, LightsCommand};
use crate::error::CliError;
use crate::output;

use super::{Store, util};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct LightRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Power")]
    power: String,
    #[tabled(rename = "Brightness")]
    brightness: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Connected")]
    connected: String,
}

impl From<&Light> for LightRow {
    fn from(l: &Light) -> Self {
        Self {
            id: l.id.clone(),
            label: l.label.clone(),
            power: l.power.to_string(),
            brightness: percent(l.brightness),
            color: color_summary(l),
            connected: if l.connected { "yes" } else { "no" }.into(),
        }
    }
}

fn percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

fn color_summary(l: &Light) -> String {
    if l.color.saturation > 0.0 {
        format!("hue {:.0}, sat {}", l.color.hue, percent(l.color.saturation))
    } else {
        format!("{}K", l.color.kelvin)
    }
}

fn detail(l: &Light, color: bool) -> String {
    [
        format!("ID:         {}", l.id),
        format!("Label:      {}", l.label),
        format!("Power:      {}", output::paint_power(l.power, color)),
        format!("Brightness: {}", percent(l.brightness)),
        format!("Hue:        {:.0}", l.color.hue),
        format!("Saturation: {}", percent(l.color.saturation)),
        format!("Kelvin:     {}", l.color.kelvin),
        format!("Connected:  {}", if l.connected { "yes" } else { "no" }),
    ]
    .join("\n")
}

pub fn render_lights(lights: &[Light], global: &GlobalOpts) -> Result<String, CliError> {
    output::render_list(global.output, lights, |l| LightRow::from(l), |l| l.id.clone())
}

fn render_light(light: &Light, global: &GlobalOpts) -> Result<String, CliError> {
    let color = output::should_color(global.color_mode);
    output::render_single(global.output, light, |l| detail(l, color), |l| l.id.clone())
}

fn validate_payload(
    power: Option<Power>,
    color: Option<String>,
    brightness: Option<f64>,
    duration: Option<f64>,
) -> Result<LightStatePayload, CliError> {
    if let Some(b) = brightness.filter(|b| !(0.0..=1.0).contains(b)) {
        return Err(CliError::Validation {
            field: "brightness".into(),
            reason: format!("{b} is outside 0.0..=1.0"),
        });
    }
    if duration.is_some_and(|d| d.is_nan() || d < 0.0) {
        return Err(CliError::Validation {
            field: "duration".into(),
            reason: "must be zero or more seconds".into(),
        });
    }

    let payload = LightStatePayload {
        power,
        color,
        brightness,
        duration,
    };
    if payload.is_empty() {
        return Err(CliError::Validation {
            field: "state".into(),
            reason: "pass at least one of --power, --color, --brightness, --duration".into(),
        });
    }
    Ok(payload)
}

/// Light id named by an `id:` selector.
fn single_id(selector: &str) -> Option<&str> {
    selector.strip_prefix("id:").filter(|id| !id.is_empty())
}

/// Refresh, then patch the cached light an `id:` selector names.
///
/// Returns the patched id. Group, label, and `all` selectors are left for
/// the next refresh, as is a patch with nothing locally predictable.
async fn patch_cached<'a>(
    store: &Store,
    selector: &'a str,
    global: &GlobalOpts,
    patch: impl FnOnce(&Light) -> LightUpdate,
) -> Result<Option<&'a str>, CliError> {
    let Some(id) = single_id(selector) else {
        return Ok(None);
    };
    util::refresh(store, global).await?;
    let Some(light) = store.get_light(id) else {
        return Ok(None);
    };

    let update = patch(&light);
    Ok((!update.is_empty() && store.update_light(id, &update)).then_some(id))
}

/// Print the cached light after a command, or a status line when nothing
/// cached was touched.
fn report(
    store: &Store,
    patched: Option<&str>,
    message: &str,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match patched.and_then(|id| store.get_light(id)) {
        Some(light) => output::print_output(&render_light(&light, global)?, global.quiet),
        None => output::status(message, global.quiet),
    }
    Ok(())
}

/// Optimistically switch one cached light, then send the command.
///
/// The cached copy is patched before the request goes out and is not
/// restored if LIFX rejects it; the printed state is the optimistic one.
async fn switch(
    store: &Store,
    id: &str,
    power: Power,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    util::refresh(store, global).await?;

    if !store.update_light(id, &LightUpdate::power(power)) {
        return Err(CliError::NotFound {
            resource_type: "light".into(),
            identifier: id.into(),
            list_command: "lights list".into(),
        });
    }

    store
        .client()
        .set_light_state(&format!("id:{id}"), &LightStatePayload::power(power))
        .await?;

    if let Some(light) = store.get_light(id) {
        output::print_output(&render_light(&light, global)?, global.quiet);
    }
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    store: &Store,
    args: LightsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        LightsCommand::List => {
            util::refresh(store, global).await?;
            let out = render_lights(&store.lights(), global)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        LightsCommand::Get { id } => {
            // A fresh process has an empty store, so this takes the fetch path.
            let light = load_light(store, &id).await?;
            output::print_output(&render_light(&light, global)?, global.quiet);
            Ok(())
        }

        LightsCommand::Set {
            selector,
            power,
            color,
            brightness,
            duration,
        } => {
            let payload = validate_payload(power, color, brightness, duration)?;
            let patched =
                patch_cached(store, &selector, global, |_| LightUpdate::from(&payload)).await?;
            store.client().set_light_state(&selector, &payload).await?;
            report(store, patched, &format!("Updated {selector}"), global)
        }

        LightsCommand::Toggle { selector } => {
            let patched = patch_cached(store, &selector, global, |light| {
                LightUpdate::power(light.power.toggled())
            })
            .await?;
            store.client().toggle_light(&selector).await?;
            report(store, patched, &format!("Toggled {selector}"), global)
        }

        LightsCommand::On { id } => switch(store, &id, Power::On, global).await,
        LightsCommand::Off { id } => switch(store, &id, Power::Off, global).await,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use oculus_core::Color;

    use super::*;

    fn desk() -> Light {
        Light {
            id: "d073d5000001".into(),
            label: "Desk".into(),
            power: Power::On,
            brightness: 0.42,
            color: Color {
                hue: 0.0,
                saturation: 0.0,
                kelvin: 3500,
            },
            connected: true,
        }
    }

    #[test]
    fn row_formats_brightness_and_white_color() {
        let row = LightRow::from(&desk());
        assert_eq!(row.brightness, "42%");
        assert_eq!(row.color, "3500K");
        assert_eq!(row.power, "on");
        assert_eq!(row.connected, "yes");
    }

    #[test]
    fn saturated_color_shows_hue() {
        let mut light = desk();
        light.color.hue = 120.0;
        light.color.saturation = 1.0;
        assert_eq!(color_summary(&light), "hue 120, sat 100%");
    }

    #[test]
    fn only_id_selectors_name_a_cached_light() {
        assert_eq!(single_id("id:d073d5000001"), Some("d073d5000001"));
        assert_eq!(single_id("id:"), None);
        assert_eq!(single_id("group:kitchen"), None);
        assert_eq!(single_id("all"), None);
    }

    #[test]
    fn payload_needs_at_least_one_field() {
        let err = validate_payload(None, None, None, None).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::exit_code::USAGE);
    }

    #[test]
    fn brightness_out_of_range_is_rejected() {
        assert!(validate_payload(None, None, Some(1.5), None).is_err());
        assert!(validate_payload(None, None, Some(-0.1), None).is_err());
        assert!(validate_payload(None, None, Some(f64::NAN), None).is_err());
    }

    #[test]
    fn payload_keeps_given_fields() {
        let payload =
            validate_payload(Some(Power::Off), Some("red".into()), Some(0.5), Some(2.0)).unwrap();
        assert_eq!(payload.power, Some(Power::Off));
        assert_eq!(payload.color.as_deref(), Some("red"));
        assert_eq!(payload.brightness, Some(0.5));
        assert_eq!(payload.duration, Some(2.0));
    }
}
