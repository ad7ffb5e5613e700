use crate::domain::particle::Particle;
use crate::systems::input::{InputEvent, InputSample};

use super::SimulationCore;

pub(super) fn handle_input(sim: &mut SimulationCore, event: InputEvent, now: f64) -> bool {
    match sim.input.map(event) {
        Some(sample) => spawn_from_sample(sim, &sample, now),
        None => false,
    }
}

pub(super) fn spawn_from_sample(sim: &mut SimulationCore, sample: &InputSample, now: f64) -> bool {
    match sim.spawner.try_spawn(sample, now, &mut sim.cycler) {
        Some(particle) => {
            sim.particles.push(particle);
            sim.pending.spawned += 1;
            true
        }
        None => {
            sim.pending.rejected += 1;
            false
        }
    }
}

pub(super) fn add_particle(sim: &mut SimulationCore, particle: Particle) {
    sim.particles.push(particle);
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.particles.clear();
}
