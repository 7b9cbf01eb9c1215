//! Liver ablation intervention demo.
//!
//! Builds the default scenario, retracts it, and records the pre-op /
//! post-op comparison into an in-memory renderer.
//!
//! Usage:
//! ```text
//! cargo run --example intervention                 # default strength
//! cargo run --example intervention -- 0.6          # custom strength
//! RUST_LOG=liver_retraction=debug cargo run --example intervention
//! ```

use liver_retraction::render::{render_intervention, RecordingRenderer};
use liver_retraction::scenario::{InterventionScenario, ScenarioConfig};
use liver_retraction::Result;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for this crate.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("intervention=info".parse().unwrap_or_default())
        .add_directive("liver_retraction=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut config = ScenarioConfig::default();
    if let Some(strength) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        config.retraction_strength = strength;
    }

    let scenario = InterventionScenario::new(config)?;
    let post_op = scenario.post_op();

    let mut renderer = RecordingRenderer::new();
    render_intervention(&mut renderer, scenario.pre_op(), &post_op)?;

    let field = scenario.field();
    tracing::info!(
        strength = field.params().strength(),
        radius_influence = field.params().radius_influence(),
        max_displacement = field.max_displacement(),
        "retraction applied"
    );
    for panel in renderer.panels() {
        for draw in &panel.draws {
            tracing::info!(
                panel = %panel.title,
                label = draw.style.label().unwrap_or("-"),
                points = draw.structure.point_count(),
                segments = draw.structure.segment_count(),
                "draw"
            );
        }
    }
    Ok(())
}
