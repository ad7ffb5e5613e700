//! Systems: everything that acts on the particle set each frame.
//!
//! Input Mapper -> Spawner (with Text Cycler) -> Integrator -> Renderer,
//! timed by the Frame Scheduler.

pub mod input;
pub mod integrator;
pub mod render;
pub mod scheduler;
pub mod spawner;
pub mod text_cycler;
