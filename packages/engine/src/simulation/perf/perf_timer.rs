/// Wall-clock stopwatch for frame stats.
///
/// wasm32 has no `Instant`, so the browser build reads `Date.now()` instead.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    started_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    started: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer {
            #[cfg(target_arch = "wasm32")]
            started_ms: js_sys::Date::now(),
            #[cfg(not(target_arch = "wasm32"))]
            started: std::time::Instant::now(),
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        let ms = js_sys::Date::now() - self.started_ms;
        #[cfg(not(target_arch = "wasm32"))]
        let ms = self.started.elapsed().as_secs_f64() * 1000.0;

        ms.max(0.0)
    }
}
