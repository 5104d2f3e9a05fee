//! Opt-in timing for hot interaction paths.
//!
//! Enable with the `profiling` feature:
//! ```toml
//! [dependencies]
//! moodart = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ... work ...
//! }
//! ```
//!
//! Without the feature the macro expands to nothing.

use std::time::Instant;

/// Scopes slower than this are reported at `warn`
pub const SLOW_SCOPE_MS: f64 = 4.0;

/// Time a block. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::perf::SLOW_SCOPE_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

/// RAII timer that reports its scope's duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            tracing::warn!(
                scope = self.name,
                elapsed_ms,
                threshold_ms = self.threshold_ms,
                "Slow scope"
            );
        } else {
            tracing::trace!(scope = self.name, elapsed_ms, "Scope timing");
        }
    }
}
