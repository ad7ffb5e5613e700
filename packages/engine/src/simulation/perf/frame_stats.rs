use wasm_bindgen::prelude::*;

/// Snapshot of the last frame, exposed to JS through getters
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub(crate) step_ms: f64,
    pub(crate) render_ms: f64,
    pub(crate) particle_count: u32,
    /// Spawns accepted since the previous frame
    pub(crate) spawned: u32,
    pub(crate) culled: u32,
    /// Spawns refused by the rate limit since the previous frame
    pub(crate) rejected: u32,
    pub(crate) frame: u64,
}

#[wasm_bindgen]
impl FrameStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn spawned(&self) -> u32 { self.spawned }
    #[wasm_bindgen(getter)]
    pub fn culled(&self) -> u32 { self.culled }
    #[wasm_bindgen(getter)]
    pub fn rejected(&self) -> u32 { self.rejected }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
