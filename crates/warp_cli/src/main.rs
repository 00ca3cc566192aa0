mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use cli::Args;
use warp_renderer::{emit_debug_rays, render_scene, DebugRayKind, LineRecorder};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting warp {}", env!("CARGO_PKG_VERSION"));

    let mut scene = warp_core::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    args.apply_overrides(&mut scene);
    warp_core::validate(&scene).context("Invalid render settings")?;

    let image = render_scene(&scene);
    image
        .save(&args.output, scene.render.gamma_correct)
        .with_context(|| format!("Failed to write image {}", args.output.display()))?;

    if let Some(path) = &args.debug_rays {
        if scene.emitters.is_empty() {
            log::warn!("Scene has no ray emitters; writing an empty line set");
        }

        let mut rng = StdRng::seed_from_u64(args.seed);
        let mut lines = LineRecorder::new();
        let kinds = emit_debug_rays(&scene, &mut rng, &mut lines)
            .context("Failed to emit debug rays")?;

        let count = |kind: DebugRayKind| kinds.iter().filter(|&&k| k == kind).count();
        log::info!(
            "Debug rays: {} hit, {} straight, {} curved",
            count(DebugRayKind::Hit),
            count(DebugRayKind::Straight),
            count(DebugRayKind::Curved)
        );

        lines
            .write_json(path)
            .with_context(|| format!("Failed to write debug rays {}", path.display()))?;
    }

    Ok(())
}
