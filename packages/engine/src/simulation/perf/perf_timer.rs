//! Millisecond stopwatch for perf metrics.
//! `Date::now()` on wasm32 (no `Instant` there), `Instant` elsewhere.

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    start: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { start: now() }
    }

    #[cfg(target_arch = "wasm32")]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        now() - self.start
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(target_arch = "wasm32")]
fn now() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Stamp {
    std::time::Instant::now()
}
