use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::core::Vec2;
use crate::domain::config::IntegrationMode;
use crate::systems::input::{InputEvent, TouchPoint};

use super::frame_stats::FrameStats;
use super::SimulationCore;

/// JS-facing handle. Times passed in are `performance.now()` milliseconds.
#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with the default tunables and texts
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, now_ms: f64) -> Self {
        Self {
            core: SimulationCore::new(width, height, now_ms / 1000.0),
        }
    }

    /// Create a simulation from a JSON config (camelCase keys, all optional)
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: u32, height: u32, config_json: String, now_ms: f64) -> Result<Simulation, JsValue> {
        let core = SimulationCore::from_config_json(width, height, &config_json, now_ms / 1000.0)
            .map_err(|e| {
                console_warn!("letterfall: bad config: {}", e);
                JsValue::from_str(&e)
            })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.core.resize(width, height);
    }

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    /// Scale per-tick displacement and spin by delta as well as gravity
    pub fn set_time_scaled(&mut self, enabled: bool) {
        let mode = if enabled {
            IntegrationMode::TimeScaled
        } else {
            IntegrationMode::PerFrame
        };
        self.core.set_integration_mode(mode);
    }

    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_frame_stats(&mut self, enabled: bool) {
        self.core.enable_frame_stats(enabled);
    }

    /// Stats for the last frame (zeros when disabled)
    pub fn get_frame_stats(&self) -> FrameStats {
        self.core.get_frame_stats()
    }

    // === INPUT ===

    /// mousemove: offsetX/Y and movementX/Y. Returns true if a letter spawned.
    pub fn pointer_move(&mut self, offset_x: f32, offset_y: f32, movement_x: f32, movement_y: f32, now_ms: f64) -> bool {
        let event = InputEvent::Pointer {
            offset: Vec2::new(offset_x, offset_y),
            movement: Vec2::new(movement_x, movement_y),
        };
        self.core.handle_input(event, now_ms / 1000.0)
    }

    /// touchstart: parallel arrays of identifier / clientX / clientY
    pub fn touch_start(&mut self, ids: Vec<i32>, xs: Vec<f32>, ys: Vec<f32>) {
        let event = InputEvent::TouchStart {
            touches: touch_points(&ids, &xs, &ys),
        };
        // touchstart only records positions; it never spawns
        self.core.handle_input(event, f64::NAN);
    }

    /// touchmove: parallel arrays plus the canvas's offsetLeft/offsetTop
    pub fn touch_move(
        &mut self,
        ids: Vec<i32>,
        xs: Vec<f32>,
        ys: Vec<f32>,
        canvas_left: f32,
        canvas_top: f32,
        now_ms: f64,
    ) -> bool {
        let event = InputEvent::TouchMove {
            touches: touch_points(&ids, &xs, &ys),
            canvas_offset: Vec2::new(canvas_left, canvas_top),
        };
        self.core.handle_input(event, now_ms / 1000.0)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    // === FRAME ===

    /// Tick only; returns how many particles were culled
    pub fn step(&mut self, delta_seconds: f64) -> u32 {
        self.core.step(delta_seconds) as u32
    }

    /// Draw the current particle set into a 2d context
    pub fn render(&self, ctx: &CanvasRenderingContext2d) {
        let mut surface = ctx.clone();
        self.core.render(&mut surface);
    }

    /// Tick and render for a requestAnimationFrame timestamp.
    /// Returns the delta (seconds) that was applied.
    pub fn run_frame(&mut self, now_ms: f64, ctx: &CanvasRenderingContext2d) -> f64 {
        let mut surface = ctx.clone();
        self.core.run_frame(now_ms, &mut surface).delta
    }
}

impl Simulation {
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }
}

/// Zip parallel JS arrays into touch points; extra entries are ignored
fn touch_points(ids: &[i32], xs: &[f32], ys: &[f32]) -> Vec<TouchPoint> {
    ids.iter()
        .zip(xs.iter().zip(ys.iter()))
        .map(|(&id, (&x, &y))| TouchPoint::new(id, x, y))
        .collect()
}
