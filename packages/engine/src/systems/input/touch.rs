use std::collections::HashMap;

use crate::core::Vec2;

/// One active touch as reported by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned, unique among active touches
    pub identifier: i32,
    /// Raw client (viewport) coordinates
    pub client: Vec2,
}

impl TouchPoint {
    pub fn new(identifier: i32, client_x: f32, client_y: f32) -> Self {
        Self {
            identifier,
            client: Vec2::new(client_x, client_y),
        }
    }
}

/// Last known client coordinates per touch identifier.
///
/// Every update replaces the whole map with the event's touch list, so a
/// finger missing from one event loses its history.
#[derive(Default)]
pub struct TouchTracker {
    last: HashMap<i32, Vec2>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, touches: &[TouchPoint]) {
        self.last = touches.iter().map(|t| (t.identifier, t.client)).collect();
    }

    pub fn previous(&self, identifier: i32) -> Option<Vec2> {
        self.last.get(&identifier).copied()
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_all_drops_stale_identifiers() {
        let mut tracker = TouchTracker::new();
        tracker.replace_all(&[TouchPoint::new(1, 10.0, 10.0), TouchPoint::new(2, 50.0, 50.0)]);
        assert_eq!(tracker.len(), 2);

        tracker.replace_all(&[TouchPoint::new(2, 55.0, 52.0)]);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.previous(1), None);
        assert_eq!(tracker.previous(2), Some(Vec2::new(55.0, 52.0)));
    }
}
