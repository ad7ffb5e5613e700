//! Input Mapper
//!
//! Normalizes pointer and touch events into a single `InputSample`
//! (canvas-space position plus movement since the previous event).
//!
//! Touch handling mirrors what the toy has always done:
//! - only the first touch of a move event is sampled, matched to its history
//!   by identifier
//! - samples are lifted by `touch_offset` on both axes so letters appear
//!   above and left of the finger
//! - the tracking map is replaced wholesale on every start/move event
//! - a move with no recorded history for its identifier yields zero movement

mod touch;

pub use touch::{TouchPoint, TouchTracker};

use crate::core::Vec2;
use crate::domain::config::DEFAULT_TOUCH_OFFSET;

/// Raw host input
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Mouse/pen move: offset within the canvas, movement since last move
    Pointer { offset: Vec2, movement: Vec2 },
    TouchStart { touches: Vec<TouchPoint> },
    /// `canvas_offset` is the canvas's (offsetLeft, offsetTop)
    TouchMove {
        touches: Vec<TouchPoint>,
        canvas_offset: Vec2,
    },
}

/// Normalized spawn input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSample {
    pub position: Vec2,
    pub movement: Vec2,
}

pub struct InputMapper {
    touches: TouchTracker,
    touch_offset: f32,
}

impl InputMapper {
    pub fn new(touch_offset: f32) -> Self {
        Self {
            touches: TouchTracker::new(),
            touch_offset,
        }
    }

    /// Map one event. Only pointer moves and touch moves produce samples.
    pub fn map(&mut self, event: InputEvent) -> Option<InputSample> {
        match event {
            InputEvent::Pointer { offset, movement } => Some(InputSample {
                position: offset,
                movement,
            }),
            InputEvent::TouchStart { touches } => {
                self.touches.replace_all(&touches);
                None
            }
            InputEvent::TouchMove {
                touches,
                canvas_offset,
            } => {
                let sample = touches.first().map(|touch| {
                    let position = self.project(touch.client, canvas_offset);
                    let movement = match self.touches.previous(touch.identifier) {
                        Some(prev) => position - self.project(prev, canvas_offset),
                        None => Vec2::zero(),
                    };
                    InputSample { position, movement }
                });
                self.touches.replace_all(&touches);
                sample
            }
        }
    }

    pub fn tracked_touches(&self) -> &TouchTracker {
        &self.touches
    }

    /// Client coordinates -> canvas coordinates, lifted by the touch offset
    fn project(&self, client: Vec2, canvas_offset: Vec2) -> Vec2 {
        Vec2::new(
            client.x - canvas_offset.x - self.touch_offset,
            client.y - canvas_offset.y - self.touch_offset,
        )
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_OFFSET)
    }
}
