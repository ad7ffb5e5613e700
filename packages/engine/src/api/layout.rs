//! Canvas sizing rules used by the resize watcher.

use crate::core::CanvasSize;

/// Neither canvas dimension ever drops below this
pub const MIN_CANVAS_SIDE: u32 = 100;

/// Periodic re-layout, to pick up styles that land after first paint
pub const RELAYOUT_INTERVAL_MS: i32 = 5000;

/// Canvas pixel size for a container of the given offset size
pub fn canvas_size_for_container(offset_width: i32, offset_height: i32) -> CanvasSize {
    let side = |v: i32| (v.max(0) as u32).max(MIN_CANVAS_SIDE);
    CanvasSize::new(side(offset_width), side(offset_height))
}
