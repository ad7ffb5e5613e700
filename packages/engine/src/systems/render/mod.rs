//! Renderer
//!
//! Clears the surface, then draws every live particle's glyph centered on
//! its position and rotated by its angle. Each particle is drawn inside its
//! own saved transform.

mod glyph;
mod surface;

pub use glyph::GlyphMetrics;
pub use surface::{DrawSurface, SavedTransform};

use crate::core::CanvasSize;
use crate::domain::particle::Particle;

/// Fixed text style for every glyph
#[derive(Clone, Copy, Debug)]
pub struct RenderStyle<'a> {
    pub font: &'a str,
    pub fill_style: &'a str,
}

/// Outcome of one `draw` call
#[derive(Debug, Default, PartialEq)]
pub struct RenderReport {
    pub drawn: usize,
    pub failed: usize,
    /// First host error seen this frame
    pub first_error: Option<String>,
}

pub fn draw<S: DrawSurface + ?Sized>(
    surface: &mut S,
    particles: &[Particle],
    size: CanvasSize,
    style: &RenderStyle,
) -> RenderReport {
    surface.clear(size.width as f64, size.height as f64);
    surface.set_font(style.font);
    surface.set_fill_style(style.fill_style);

    let mut report = RenderReport::default();
    for p in particles {
        match draw_particle(surface, p) {
            Ok(()) => report.drawn += 1,
            Err(e) => {
                report.failed += 1;
                if report.first_error.is_none() {
                    report.first_error = Some(e);
                }
            }
        }
    }
    report
}

fn draw_particle<S: DrawSurface + ?Sized>(surface: &mut S, p: &Particle) -> Result<(), String> {
    let mut s = SavedTransform::new(surface);
    s.translate(p.position.x as f64, p.position.y as f64)?;
    s.rotate(p.angle as f64)?;

    let mut buf = [0u8; 4];
    let glyph: &str = p.glyph.encode_utf8(&mut buf);
    let (dx, dy) = s.measure_glyph(glyph)?.centering_offset();
    s.fill_glyph(glyph, dx, dy)
}


#[cfg(test)]
mod tests {
    use super::recording::{Op, RecordingSurface};
    use super::*;
    use crate::core::Vec2;

    const STYLE: RenderStyle<'static> = RenderStyle { font: "10px mono", fill_style: "#000" };

    fn spinning(glyph: char, x: f32, y: f32, angle: f32) -> Particle {
        let mut p = Particle::at_rest(glyph, Vec2::new(x, y));
        p.angle = angle;
        p
    }

    #[test]
    fn clears_then_draws_each_particle_in_its_own_transform() {
        let mut surface = RecordingSurface::new(GlyphMetrics::new(1.0, 7.0, 9.0, 3.0));
        let particles = [spinning('H', 10.0, 20.0, 0.5), spinning('i', 30.0, 40.0, 0.0)];

        let report = draw(&mut surface, &particles, CanvasSize::new(640, 480), &STYLE);
        assert_eq!(report.drawn, 2);

        assert_eq!(
            &surface.ops[..9],
            &[
                Op::Clear(640.0, 480.0),
                Op::Font("10px mono".to_string()),
                Op::Fill("#000".to_string()),
                Op::Save,
                Op::Translate(10.0, 20.0),
                Op::Rotate(0.5),
                Op::Measure("H".to_string()),
                Op::Text("H".to_string(), -4.0, 6.0),
                Op::Restore,
            ]
        );
        assert!(surface.depth_balanced());
        assert_eq!(surface.texts().len(), 2);
    }

    #[test]
    fn non_finite_metrics_draw_at_origin() {
        let mut surface = RecordingSurface::new(GlyphMetrics::new(f64::NAN, f64::NAN, 1.0, 1.0));
        draw(&mut surface, &[spinning('x', 0.0, 0.0, 0.0)], CanvasSize::new(10, 10), &STYLE);
        assert_eq!(surface.texts(), vec![("x".to_string(), 0.0, 0.0)]);
    }

    #[test]
    fn host_errors_still_restore_transform() {
        let mut surface = RecordingSurface::new(GlyphMetrics::default());
        surface.fail_rotate = true;

        let report = draw(
            &mut surface,
            &[spinning('a', 0.0, 0.0, 0.1), spinning('b', 1.0, 1.0, 0.2)],
            CanvasSize::new(10, 10),
            &STYLE,
        );

        assert_eq!(report.drawn, 0);
        assert_eq!(report.failed, 2);
        assert_eq!(report.first_error.as_deref(), Some("rotate failed"));
        assert!(surface.depth_balanced());
        assert!(surface.texts().is_empty());
    }

    #[test]
    fn empty_set_only_clears() {
        let mut surface = RecordingSurface::new(GlyphMetrics::default());
        let report = draw(&mut surface, &[], CanvasSize::new(100, 100), &STYLE);
        assert_eq!(report, RenderReport::default());
        assert_eq!(surface.ops[0], Op::Clear(100.0, 100.0));
        assert_eq!(surface.ops.len(), 3);
    }

    #[test]
    fn multibyte_glyphs_are_drawn_whole() {
        let mut surface = RecordingSurface::new(GlyphMetrics::default());
        draw(&mut surface, &[spinning('é', 0.0, 0.0, 0.0)], CanvasSize::new(10, 10), &STYLE);
        assert_eq!(surface.texts()[0].0, "é");
    }
}
