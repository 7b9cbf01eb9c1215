use crate::error::Result;
use crate::geometry::ConnectiveStructure;
use crate::scenario::Anatomy;

use super::{Color, Renderer, Style};

/// Draws pre-op and post-op anatomy side by side.
///
/// Liver as a thin black outline, ablation zone half-transparent red,
/// tumor solid black (only when present) and all vessels merged into one
/// blue structure.
///
/// # Errors
///
/// Returns the first error reported by the renderer.
pub fn render_intervention(
    renderer: &mut dyn Renderer,
    pre_op: &Anatomy,
    post_op: &Anatomy,
) -> Result<()> {
    renderer.begin_panel("Pre-op")?;
    render_anatomy(renderer, pre_op, "Ablation zone (ground truth)")?;
    renderer.begin_panel("Post-op")?;
    render_anatomy(renderer, post_op, "Ablation zone")
}

fn render_anatomy(renderer: &mut dyn Renderer, anatomy: &Anatomy, zone_label: &str) -> Result<()> {
    let s = anatomy.to_structures();
    renderer.render(
        &s.liver,
        &Style::wireframe(Color::Black).with_label("Liver"),
    )?;
    renderer.render(
        &s.ablation_zone,
        &Style::filled(Color::Red).with_opacity(0.5)?.with_label(zone_label),
    )?;
    if let Some(tumor) = &s.tumor {
        renderer.render(tumor, &Style::filled(Color::Black).with_label("Tumor"))?;
    }
    renderer.render(
        &s.vessels,
        &Style::wireframe(Color::Blue)
            .with_line_width(3.0)?
            .with_label("Vessel"),
    )
}

/// Draws a registration before/after comparison.
///
/// Left panel: unregistered source against target. Right panel: morphed
/// source against target. A structure's auxiliary grid is drawn under it
/// only when it carries one.
///
/// # Errors
///
/// Returns the first error reported by the renderer.
pub fn render_registration(
    renderer: &mut dyn Renderer,
    source: &ConnectiveStructure,
    target: &ConnectiveStructure,
    morphed: &ConnectiveStructure,
) -> Result<()> {
    renderer.begin_panel("Unregistered source vs target")?;
    render_pair(renderer, source, target, "Unregistered source")?;
    renderer.begin_panel("Registered source vs target")?;
    render_pair(renderer, morphed, target, "Registered source")
}

fn render_pair(
    renderer: &mut dyn Renderer,
    moving: &ConnectiveStructure,
    target: &ConnectiveStructure,
    label: &str,
) -> Result<()> {
    if let Some(grid) = &moving.auxiliary_grid {
        renderer.render(
            grid,
            &Style::wireframe(Color::Black).with_opacity(0.4)?,
        )?;
    }
    renderer.render(
        moving,
        &Style::filled(Color::Teal)
            .with_opacity(0.7)?
            .with_line_width(2.0)?
            .with_label(label),
    )?;
    renderer.render(
        target,
        &Style::wireframe(Color::Red)
            .with_line_width(2.0)?
            .with_label("Target"),
    )
}

/// Overlays a registration result on the ground truth in a single panel.
///
/// # Errors
///
/// Returns the first error reported by the renderer.
pub fn render_validation(
    renderer: &mut dyn Renderer,
    ground_truth: &ConnectiveStructure,
    result: &ConnectiveStructure,
) -> Result<()> {
    renderer.begin_panel("Final validation (de-retraction)")?;
    renderer.render(
        ground_truth,
        &Style::wireframe(Color::Blue)
            .with_line_width(2.0)?
            .with_label("Ground truth"),
    )?;
    renderer.render(
        result,
        &Style::filled(Color::Red)
            .with_opacity(0.5)?
            .with_label("Corrected zone"),
    )
}
