//! Core building blocks shared by every system: math, sizes and console plumbing.

#[macro_use]
pub mod utils;
pub mod size;
pub mod vec2;

pub use size::CanvasSize;
pub use vec2::Vec2;
