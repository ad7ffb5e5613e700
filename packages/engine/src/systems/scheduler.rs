//! Frame Scheduler timing
//!
//! Turns the host's per-refresh timestamps (milliseconds) into an
//! `(elapsed, delta)` pair in seconds. The host loop itself lives in
//! `api::web`.

/// Timing handed to the integrator once per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeSample {
    /// Seconds since the first frame
    pub elapsed: f64,
    /// Seconds since the previous frame
    pub delta: f64,
}

pub struct FrameScheduler {
    start_ms: f64,
    previous_ms: f64,
}

impl FrameScheduler {
    pub fn new(start_ms: f64) -> Self {
        Self {
            start_ms,
            previous_ms: start_ms,
        }
    }

    /// Produce the sample for a frame at `now_ms` and remember it as previous.
    ///
    /// A clock that steps backwards (or isn't finite) yields `delta = 0`.
    pub fn advance(&mut self, now_ms: f64) -> TimeSample {
        if !now_ms.is_finite() {
            return TimeSample {
                elapsed: (self.previous_ms - self.start_ms) / 1000.0,
                delta: 0.0,
            };
        }

        let delta_ms = (now_ms - self.previous_ms).max(0.0);
        self.previous_ms = self.previous_ms.max(now_ms);

        TimeSample {
            elapsed: (self.previous_ms - self.start_ms) / 1000.0,
            delta: delta_ms / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_delta() {
        let mut s = FrameScheduler::new(1000.0);
        assert_eq!(s.advance(1000.0), TimeSample { elapsed: 0.0, delta: 0.0 });
    }

    #[test]
    fn elapsed_and_delta_in_seconds() {
        let mut s = FrameScheduler::new(1000.0);
        s.advance(1500.0);
        let t = s.advance(1750.0);
        assert_eq!(t.elapsed, 0.75);
        assert_eq!(t.delta, 0.25);
    }

    #[test]
    fn backwards_clock_clamps_delta() {
        let mut s = FrameScheduler::new(0.0);
        s.advance(500.0);
        let t = s.advance(400.0);
        assert_eq!(t.delta, 0.0);
        assert_eq!(t.elapsed, 0.5);
        assert_eq!(s.advance(750.0).delta, 0.25);
    }

    #[test]
    fn nan_clock_is_ignored() {
        let mut s = FrameScheduler::new(0.0);
        s.advance(250.0);
        assert_eq!(s.advance(f64::NAN).delta, 0.0);
        assert_eq!(s.advance(500.0).delta, 0.25);
    }
}
