use crate::core::Vec2;

/// A single falling glyph ("screen letter")
///
/// `glyph` and `angular_velocity` are fixed at spawn; the integrator owns
/// everything else from then on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub glyph: char,
    /// Canvas pixel space
    pub position: Vec2,
    /// Pixels per tick (see `IntegrationMode`)
    pub velocity: Vec2,
    /// Rotation (radians)
    pub angle: f32,
    /// Radians per tick
    pub angular_velocity: f32,
}

impl Particle {
    pub fn new(glyph: char, position: Vec2, velocity: Vec2, angular_velocity: f32) -> Self {
        Self {
            glyph,
            position,
            velocity,
            angle: 0.0,
            angular_velocity,
        }
    }

    /// At rest at `position`, no spin
    pub fn at_rest(glyph: char, position: Vec2) -> Self {
        Self::new(glyph, position, Vec2::zero(), 0.0)
    }
}
