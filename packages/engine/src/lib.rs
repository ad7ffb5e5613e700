//! Letterfall Engine - falling-letter particle toy in WASM
//!
//! Moving the pointer (or a finger) over the canvas spawns letters taken, in
//! order, from a few literary quotations. Letters fall under gravity, spin,
//! and are dropped once they are well below the visible area.
//!
//! Architecture:
//! - core/        - Math, sizes, console macros
//! - domain/      - Particle, source texts, config
//! - systems/     - Text cycler, input mapper, spawner, integrator, renderer, frame timing
//! - simulation/  - SimulationCore (owns all state) and the wasm facade
//! - api/         - Canvas surface, layout rules, browser bootstrap (wasm32)

// Console macros must be declared first for textual scoping
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Thread pool init for the `parallel` integrator
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("letterfall engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{CanvasSize, Vec2};
pub use domain::config::{AngularProfile, IntegrationMode, SimulationConfig};
pub use domain::particle::Particle;
pub use simulation::{FrameStats, Simulation, SimulationCore};
pub use systems::input::{InputEvent, InputSample, TouchPoint};
pub use systems::render::{DrawSurface, GlyphMetrics};
pub use systems::scheduler::TimeSample;
