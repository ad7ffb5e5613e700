use crate::systems::render::{draw, DrawSurface, RenderReport, RenderStyle};

use super::SimulationCore;

pub(super) fn render<S: DrawSurface + ?Sized>(sim: &SimulationCore, surface: &mut S) -> RenderReport {
    let style = RenderStyle {
        font: &sim.config.font,
        fill_style: &sim.config.fill_style,
    };
    let report = draw(surface, &sim.particles, sim.size, &style);

    // one line per frame, not per glyph
    if let Some(err) = &report.first_error {
        console_warn!(
            "letterfall: {} of {} glyphs failed to draw: {}",
            report.failed,
            sim.particles.len(),
            err
        );
    }
    report
}
