//! Scene command handlers.

use tabled::Tabled;

use oculus_core::Scene;

use crate::cli::{GlobalOpts, ScenesArgs, ScenesCommand};
use crate::error::CliError;
use crate::output;

use super::{Store, util};

#[derive(Tabled)]
struct SceneRow {
    #[tabled(rename = "UUID")]
    uuid: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Scene> for SceneRow {
    fn from(s: &Scene) -> Self {
        Self {
            uuid: s.uuid.clone(),
            name: s.name.clone(),
        }
    }
}

pub async fn handle(
    store: &Store,
    args: ScenesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        ScenesCommand::List => {
            util::refresh(store, global).await?;
            let out = output::render_list(
                global.output,
                &store.scenes(),
                |s| SceneRow::from(s),
                |s| s.uuid.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ScenesCommand::Activate { scene } => {
            util::refresh(store, global).await?;
            let scenes = store.scenes();
            let target = util::resolve_scene(&scenes, &scene)?;
            store.client().activate_scene(&target.uuid).await?;
            output::status(&format!("Activated scene {}", target.name), global.quiet);
            Ok(())
        }
    }
}
