use crate::core::CanvasSize;
use crate::domain::config::SimulationConfig;
use crate::systems::input::InputMapper;
use crate::systems::scheduler::TimeSample;
use crate::systems::spawner::{SpawnLimits, Spawner};
use crate::systems::text_cycler::TextCycler;

use super::frame_stats::FrameStats;
use super::{SimulationCore, SpawnCounters};

pub(super) fn create_simulation_core(
    width: u32,
    height: u32,
    config: SimulationConfig,
    now: f64,
) -> Result<SimulationCore, String> {
    config.validate()?;
    let cycler = TextCycler::new(&config.texts)?;

    console_log!(
        "letterfall: simulation {}x{} with {} source texts ({} glyphs per cycle)",
        width,
        height,
        cycler.text_count(),
        cycler.cycle_len()
    );

    Ok(assemble(width, height, config, cycler, now))
}

pub(super) fn create_default_core(width: u32, height: u32, now: f64) -> SimulationCore {
    assemble(width, height, SimulationConfig::default(), TextCycler::default(), now)
}

fn assemble(
    width: u32,
    height: u32,
    config: SimulationConfig,
    cycler: TextCycler,
    now: f64,
) -> SimulationCore {
    SimulationCore {
        spawner: Spawner::new(now, SpawnLimits::from_config(&config)),
        input: InputMapper::new(config.touch_offset),
        size: CanvasSize::new(width, height),
        particles: Vec::with_capacity(256),
        cycler,
        config,

        scheduler: None,
        last_time: TimeSample::default(),
        frame: 0,

        pending: SpawnCounters::default(),
        stats_enabled: false,
        stats: FrameStats::default(),
    }
}
