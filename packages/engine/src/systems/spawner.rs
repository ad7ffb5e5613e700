//! Particle Spawner
//!
//! Rate-limited gate between input samples and the particle set. Spawn
//! timing is independent of how often the host delivers input events.

use crate::core::utils::numeric::clamp_abs;
use crate::core::Vec2;
use crate::domain::config::{AngularProfile, SimulationConfig};
use crate::domain::particle::Particle;

use super::input::InputSample;
use super::text_cycler::TextCycler;

/// Scale from horizontal movement to spin in `AngularProfile::Scaled`
const ANGULAR_SCALE: f32 = 100.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnLimits {
    /// Minimum seconds between accepted spawns
    pub interval: f64,
    pub max_speed: f32,
    pub max_angular_velocity: f32,
    pub angular_profile: AngularProfile,
}

impl SpawnLimits {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            interval: config.spawn_interval,
            max_speed: config.max_speed,
            max_angular_velocity: config.max_angular_velocity,
            angular_profile: config.angular_profile,
        }
    }

    /// Initial velocity and spin for a given movement. NaN components become 0;
    /// anything past the limits, infinities included, saturates.
    pub fn kinematics(&self, movement: Vec2) -> (Vec2, f32) {
        let velocity = Vec2::new(
            clamp_abs(movement.x, self.max_speed),
            clamp_abs(movement.y, self.max_speed),
        );
        let spin_source = match self.angular_profile {
            AngularProfile::Scaled => movement.x / ANGULAR_SCALE,
            AngularProfile::Raw => movement.x,
        };
        let angular_velocity = clamp_abs(spin_source, self.max_angular_velocity);
        (velocity, angular_velocity)
    }
}

impl Default for SpawnLimits {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

pub struct Spawner {
    last_spawn_time: f64,
    limits: SpawnLimits,
}

impl Spawner {
    /// `now` is the clock reading (seconds) at construction; the first spawn
    /// is accepted no earlier than `now + interval`.
    pub fn new(now: f64, limits: SpawnLimits) -> Self {
        Self {
            last_spawn_time: now,
            limits,
        }
    }

    /// Try to build a particle from `sample` at time `now` (seconds).
    ///
    /// Returns `None` without touching any state when the previous spawn was
    /// less than `interval` ago or `now` is not a usable clock reading.
    pub fn try_spawn(
        &mut self,
        sample: &InputSample,
        now: f64,
        cycler: &mut TextCycler,
    ) -> Option<Particle> {
        if !now.is_finite() || now - self.last_spawn_time < self.limits.interval {
            return None;
        }
        self.last_spawn_time = now;

        let (velocity, angular_velocity) = self.limits.kinematics(sample.movement);
        Some(Particle::new(
            cycler.next_char(),
            sample.position,
            velocity,
            angular_velocity,
        ))
    }

    pub fn last_spawn_time(&self) -> f64 {
        self.last_spawn_time
    }

    pub fn set_limits(&mut self, limits: SpawnLimits) {
        self.limits = limits;
    }
}
