//! Scenery engine - command-line runner.
//!
//! ```text
//! scenery-engine set-image <scene> <image>
//! scenery-engine show <scene>
//! scenery-engine scan <scene> [--submit <gm-row> [<player-row>]]
//! scenery-engine resolve <scene> <gm|player>
//! ```

use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scenery_domain::{RoleSelection, SceneId, ViewerRole};
use scenery_engine::infrastructure::{canvas::LoggingCanvas, config::SceneryConfig};
use scenery_engine::use_cases::scenery::ApplyOutcome;
use scenery_engine::App;

const USAGE: &str = "usage: scenery-engine <set-image|show|scan|resolve> <scene> [args]";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scenery_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, rest) = args.split_first().ok_or_else(|| anyhow!(USAGE))?;
    let (scene, rest) = rest.split_first().ok_or_else(|| anyhow!(USAGE))?;
    let scene_id: SceneId = scene.parse().context("invalid scene id")?;

    let app = App::connect(SceneryConfig::from_env()).await?;

    match command.as_str() {
        "set-image" => {
            let image = rest.first().ok_or_else(|| anyhow!("missing image path"))?;
            app.repositories
                .scenery
                .set_scene_image(scene_id, image)
                .await?;
            println!("{scene_id}: {image}");
        }
        "show" => match app.repositories.scenery.load(scene_id).await? {
            Some(data) => println!("{}", serde_json::to_string_pretty(&data)?),
            None => println!("{scene_id} has no scenery"),
        },
        "scan" => scan(&app, scene_id, rest).await?,
        "resolve" => {
            let role: ViewerRole = rest
                .first()
                .ok_or_else(|| anyhow!("missing role"))?
                .parse()?;
            let canvas = Arc::new(LoggingCanvas::new());
            let mut session = app.viewer_session(canvas, role);
            match session.on_viewer_init(scene_id).await {
                ApplyOutcome::Applied { image, .. } => println!("{role}: {image}"),
                ApplyOutcome::NotConfigured => println!("{role}: scene image unchanged"),
                ApplyOutcome::Untouched => bail!("could not resolve scenery for {scene_id}"),
            }
        }
        other => bail!("unknown command `{other}`\n{USAGE}"),
    }

    Ok(())
}

async fn scan(app: &App, scene_id: SceneId, args: &[String]) -> anyhow::Result<()> {
    let scenery = &app.use_cases.scenery;
    let mut store = scenery.open_editor.execute(scene_id).await?;
    scenery.scan.execute(&mut store).await?;

    for (row, variation) in store.list_for_display().iter().enumerate() {
        println!("{row:>3}  {:<20} {}", variation.name, variation.file);
    }

    let Some(("--submit", rows)) = args.split_first().map(|(flag, rows)| (flag.as_str(), rows))
    else {
        return Ok(());
    };
    let selection = match rows {
        [gm] => RoleSelection::single(gm.parse()?),
        [gm, player] => RoleSelection::split(gm.parse()?, player.parse()?),
        _ => bail!("--submit takes one or two row numbers"),
    };

    let data = scenery
        .submit
        .execute(scene_id, ViewerRole::Gm, &store.list_for_display(), selection)
        .await?;
    println!(
        "saved: GM sees {}, players see {}",
        data.gm_image(),
        data.pl_image()
    );
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
