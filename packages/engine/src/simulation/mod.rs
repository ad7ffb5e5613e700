//! Simulation - the single owner of all mutable toy state
//!
//! `SimulationCore` holds the particle set, the text cursor, the spawn clock
//! and the touch tracking map. The browser glue and the wasm facade own one
//! instance each and drive it from input and frame callbacks; nothing here
//! is global.
//!
//! Per frame: input -> spawn (between frames), then `step` (integrate + cull)
//! and `render`.

use crate::core::CanvasSize;
use crate::domain::config::{AngularProfile, IntegrationMode, SimulationConfig};
use crate::domain::particle::Particle;
use crate::systems::input::{InputEvent, InputMapper, InputSample};
use crate::systems::render::{DrawSurface, RenderReport};
use crate::systems::scheduler::{FrameScheduler, TimeSample};
use crate::systems::spawner::Spawner;
use crate::systems::text_cycler::TextCycler;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/frame_stats.rs"]
mod frame_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_frame.rs"]
mod render_frame;
mod facade;

pub use facade::Simulation;
pub use frame_stats::FrameStats;

use perf_timer::PerfTimer;

/// Spawn outcomes since the last frame
#[derive(Clone, Copy, Debug, Default)]
struct SpawnCounters {
    spawned: u32,
    rejected: u32,
}

pub struct SimulationCore {
    config: SimulationConfig,
    size: CanvasSize,
    particles: Vec<Particle>,
    cycler: TextCycler,
    spawner: Spawner,
    input: InputMapper,

    // Frame timing
    scheduler: Option<FrameScheduler>,
    last_time: TimeSample,
    frame: u64,

    // Stats
    pending: SpawnCounters,
    stats_enabled: bool,
    stats: FrameStats,
}

impl SimulationCore {
    /// Default tunables and built-in texts. `now` is the clock reading in
    /// seconds; the spawn rate limit starts counting from it.
    pub fn new(width: u32, height: u32, now: f64) -> Self {
        init::create_default_core(width, height, now)
    }

    pub fn with_config(
        width: u32,
        height: u32,
        config: SimulationConfig,
        now: f64,
    ) -> Result<Self, String> {
        init::create_simulation_core(width, height, config, now)
    }

    pub fn from_config_json(width: u32, height: u32, json: &str, now: f64) -> Result<Self, String> {
        let config = SimulationConfig::from_json(json)?;
        Self::with_config(width, height, config, now)
    }

    pub fn width(&self) -> u32 { self.size.width }

    pub fn height(&self) -> u32 { self.size.height }

    pub fn canvas_size(&self) -> CanvasSize { self.size }

    pub fn particle_count(&self) -> u32 { self.particles.len() as u32 }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    /// Ticks run so far
    pub fn frame(&self) -> u64 { self.frame }

    pub fn config(&self) -> &SimulationConfig { &self.config }

    /// Timing of the most recent `run_frame`
    pub fn last_time_sample(&self) -> TimeSample { self.last_time }

    // === SETTINGS ===

    /// Resize the logical canvas (drives the cull line and the clear rect)
    pub fn resize(&mut self, width: u32, height: u32) {
        settings::resize(self, width, height);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_integration_mode(&mut self, mode: IntegrationMode) {
        settings::set_integration_mode(self, mode);
    }

    pub fn set_angular_profile(&mut self, profile: AngularProfile) {
        settings::set_angular_profile(self, profile);
    }

    pub fn config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_frame_stats(&mut self, enabled: bool) {
        settings::enable_frame_stats(self, enabled);
    }

    /// Stats for the last frame (zeros when disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        settings::get_frame_stats(self)
    }

    // === COMMANDS ===

    /// Feed one host input event; returns true if a particle was spawned.
    /// `now` is in seconds.
    pub fn handle_input(&mut self, event: InputEvent, now: f64) -> bool {
        commands::handle_input(self, event, now)
    }

    /// Spawn from an already-normalized sample (still rate limited)
    pub fn spawn_from_sample(&mut self, sample: &InputSample, now: f64) -> bool {
        commands::spawn_from_sample(self, sample, now)
    }

    /// Insert a particle directly, bypassing the spawner
    pub fn add_particle(&mut self, particle: Particle) {
        commands::add_particle(self, particle);
    }

    /// Drop every live particle
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === FRAME ===

    /// One tick: integrate with `delta` seconds, then cull. Returns the
    /// number of culled particles.
    pub fn step(&mut self, delta: f64) -> usize {
        step::step(self, delta)
    }

    /// Draw the current particle set
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> RenderReport {
        render_frame::render(self, surface)
    }

    /// Full frame at host timestamp `now_ms`: time sample, tick, render.
    pub fn run_frame<S: DrawSurface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> TimeSample {
        step::run_frame(self, now_ms, surface)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
