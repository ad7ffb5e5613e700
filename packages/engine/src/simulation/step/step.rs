use crate::systems::integrator::{cull, integrate};
use crate::systems::render::DrawSurface;
use crate::systems::scheduler::{FrameScheduler, TimeSample};

use super::render_frame::render;
use super::{FrameStats, PerfTimer, SimulationCore};

pub(super) fn step(sim: &mut SimulationCore, delta: f64) -> usize {
    integrate(
        &mut sim.particles,
        delta as f32,
        sim.config.gravity,
        sim.config.integration,
    );
    let culled = cull(
        &mut sim.particles,
        sim.size.height as f32,
        sim.config.cull_factor,
    );
    sim.frame += 1;
    culled
}

pub(super) fn run_frame<S: DrawSurface + ?Sized>(
    sim: &mut SimulationCore,
    now_ms: f64,
    surface: &mut S,
) -> TimeSample {
    let time = sim
        .scheduler
        .get_or_insert_with(|| FrameScheduler::new(now_ms))
        .advance(now_ms);

    let perf_on = sim.stats_enabled;
    let step_timer = if perf_on { Some(PerfTimer::start()) } else { None };
    let culled = step(sim, time.delta);
    let step_ms = step_timer.map(|t| t.elapsed_ms()).unwrap_or(0.0);

    let render_timer = if perf_on { Some(PerfTimer::start()) } else { None };
    render(sim, surface);
    let render_ms = render_timer.map(|t| t.elapsed_ms()).unwrap_or(0.0);

    let counters = std::mem::take(&mut sim.pending);
    if perf_on {
        sim.stats = FrameStats {
            step_ms,
            render_ms,
            particle_count: sim.particles.len() as u32,
            spawned: counters.spawned,
            culled: culled as u32,
            rejected: counters.rejected,
            frame: sim.frame,
        };
    }

    sim.last_time = time;
    time
}
