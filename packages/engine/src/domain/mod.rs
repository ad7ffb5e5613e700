//! Domain data: the particle itself, the source texts, and tunables.

pub mod config;
pub mod particle;
pub mod texts;
