use crate::core::CanvasSize;
use crate::domain::config::{AngularProfile, IntegrationMode};
use crate::systems::spawner::SpawnLimits;

use super::frame_stats::FrameStats;
use super::SimulationCore;

pub(super) fn resize(sim: &mut SimulationCore, width: u32, height: u32) {
    let size = CanvasSize::new(width, height);
    if size != sim.size {
        console_log!("letterfall: resize {}x{} -> {}x{}", sim.size.width, sim.size.height, width, height);
        sim.size = size;
    }
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f32) {
    if gravity.is_finite() {
        sim.config.gravity = gravity;
    } else {
        console_warn!("letterfall: ignoring non-finite gravity {}", gravity);
    }
}

pub(super) fn set_integration_mode(sim: &mut SimulationCore, mode: IntegrationMode) {
    sim.config.integration = mode;
}

pub(super) fn set_angular_profile(sim: &mut SimulationCore, profile: AngularProfile) {
    sim.config.angular_profile = profile;
    sim.spawner.set_limits(SpawnLimits::from_config(&sim.config));
}

pub(super) fn config_json(sim: &SimulationCore) -> String {
    sim.config.to_json()
}

pub(super) fn enable_frame_stats(sim: &mut SimulationCore, enabled: bool) {
    sim.stats_enabled = enabled;
    if !enabled {
        sim.stats = FrameStats::default();
    }
}

pub(super) fn get_frame_stats(sim: &SimulationCore) -> FrameStats {
    sim.stats.clone()
}
