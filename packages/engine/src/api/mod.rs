//! Host-facing glue: the canvas drawing surface, layout rules, and (on
//! wasm32) the browser bootstrap that wires events and the frame loop.

pub mod canvas;
pub mod layout;

#[cfg(target_arch = "wasm32")]
pub mod web;
