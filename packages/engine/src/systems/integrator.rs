//! Physics Integrator
//!
//! Explicit Euler with a fixed downward gravity, followed by culling of
//! particles that have fallen well below the visible area.
//!
//! Gravity accumulates into velocity scaled by `delta`. In
//! `IntegrationMode::PerFrame` velocity and spin are then applied as
//! per-tick displacements, unscaled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec2;
use crate::domain::config::IntegrationMode;
use crate::domain::particle::Particle;

/// Advance every particle by one tick. Order-independent across particles.
pub fn integrate(particles: &mut [Particle], delta: f32, gravity: f32, mode: IntegrationMode) {
    let dv = Vec2::new(0.0, gravity * delta);
    let scale = match mode {
        IntegrationMode::PerFrame => 1.0,
        IntegrationMode::TimeScaled => delta,
    };

    #[cfg(feature = "parallel")]
    {
        particles
            .par_iter_mut()
            .for_each(|p| integrate_particle(p, dv, scale));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for p in particles.iter_mut() {
            integrate_particle(p, dv, scale);
        }
    }
}

#[inline(always)]
fn integrate_particle(p: &mut Particle, dv: Vec2, scale: f32) {
    p.velocity += dv;
    p.position += p.velocity * scale;
    p.angle += p.angular_velocity * scale;
}

/// Y coordinate at and below which particles are removed
#[inline]
pub fn cull_line(canvas_height: f32, cull_factor: f32) -> f32 {
    canvas_height * cull_factor
}

/// Drop every particle with `position.y >= canvas_height * cull_factor`.
/// A non-finite `y` is dropped too. Returns how many were removed.
pub fn cull(particles: &mut Vec<Particle>, canvas_height: f32, cull_factor: f32) -> usize {
    let line = cull_line(canvas_height, cull_factor);
    let before = particles.len();
    particles.retain(|p| p.position.y < line);
    before - particles.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Particle {
        Particle::at_rest('a', Vec2::new(x, y))
    }

    #[test]
    fn gravity_is_time_scaled_but_displacement_is_not() {
        let mut ps = vec![at(100.0, 100.0)];

        integrate(&mut ps, 1.0, 10.0, IntegrationMode::PerFrame);
        assert_eq!(ps[0].velocity, Vec2::new(0.0, 10.0));
        assert_eq!(ps[0].position, Vec2::new(100.0, 110.0));

        integrate(&mut ps, 1.0, 10.0, IntegrationMode::PerFrame);
        assert_eq!(ps[0].velocity, Vec2::new(0.0, 20.0));
        assert_eq!(ps[0].position, Vec2::new(100.0, 130.0));
    }

    #[test]
    fn per_frame_ignores_delta_for_position_and_angle() {
        let mut ps = vec![Particle::new('a', Vec2::zero(), Vec2::new(3.0, 0.0), 0.05)];
        integrate(&mut ps, 0.5, 0.0, IntegrationMode::PerFrame);
        assert_eq!(ps[0].position, Vec2::new(3.0, 0.0));
        assert_eq!(ps[0].angle, 0.05);
    }

    #[test]
    fn time_scaled_multiplies_by_delta() {
        let mut ps = vec![Particle::new('a', Vec2::zero(), Vec2::new(4.0, 0.0), 0.5)];
        integrate(&mut ps, 0.5, 10.0, IntegrationMode::TimeScaled);
        assert_eq!(ps[0].velocity, Vec2::new(4.0, 5.0));
        assert_eq!(ps[0].position, Vec2::new(2.0, 2.5));
        assert_eq!(ps[0].angle, 0.25);
    }

    #[test]
    fn spin_accumulates_and_never_changes() {
        let mut ps = vec![Particle::new('a', Vec2::zero(), Vec2::zero(), 0.25)];
        for _ in 0..4 {
            integrate(&mut ps, 0.016, 10.0, IntegrationMode::PerFrame);
        }
        assert_eq!(ps[0].angle, 1.0);
        assert_eq!(ps[0].angular_velocity, 0.25);
    }

    #[test]
    fn empty_set_is_a_no_op() {
        let mut ps: Vec<Particle> = Vec::new();
        integrate(&mut ps, 1.0, 10.0, IntegrationMode::PerFrame);
        assert_eq!(cull(&mut ps, 200.0, 1.5), 0);
        assert!(ps.is_empty());
    }

    #[test]
    fn cull_uses_inclusive_line() {
        let mut ps = vec![at(0.0, 299.0), at(0.0, 300.0), at(0.0, 250.0), at(0.0, 301.5)];
        let removed = cull(&mut ps, 200.0, 1.5);
        assert_eq!(removed, 2);
        let ys: Vec<f32> = ps.iter().map(|p| p.position.y).collect();
        assert_eq!(ys, vec![299.0, 250.0]);
    }

    #[test]
    fn cull_ignores_sides_and_top() {
        let mut ps = vec![at(-5000.0, 10.0), at(5000.0, 10.0), at(10.0, -5000.0)];
        assert_eq!(cull(&mut ps, 200.0, 1.5), 0);
        assert_eq!(ps.len(), 3);
    }

    #[test]
    fn cull_drops_non_finite_positions() {
        let mut ps = vec![at(0.0, f32::NAN), at(0.0, 10.0)];
        assert_eq!(cull(&mut ps, 200.0, 1.5), 1);
        assert_eq!(ps[0].position.y, 10.0);
    }

    #[test]
    fn falling_particle_is_eventually_culled() {
        let mut ps = vec![Particle::new('a', Vec2::new(50.0, 100.0), Vec2::new(0.0, -14.0), 0.0)];
        let mut prev_y = ps[0].position.y;
        let mut descending = false;
        let mut ticks = 0;

        while !ps.is_empty() {
            integrate(&mut ps, 1.0 / 60.0, 10.0, IntegrationMode::PerFrame);
            if let Some(p) = ps.first() {
                if descending {
                    assert!(p.position.y >= prev_y);
                }
                descending |= p.velocity.y > 0.0;
                prev_y = p.position.y;
            }
            cull(&mut ps, 200.0, 1.5);
            for p in &ps {
                assert!(p.position.y < 300.0);
            }
            ticks += 1;
            assert!(ticks < 10_000, "particle never left the canvas");
        }
    }
}
