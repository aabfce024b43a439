//! Trailing-edge debounce and leading-edge throttle.
//!
//! DESIGN
//! ======
//! `Debouncer` supersedes rather than cancels: every call bumps a shared
//! generation counter and spawns a sleeper; only the sleeper whose
//! generation is still current when it wakes runs the callback. `Throttle`
//! is the mirror image: the first call in a window is admitted, the rest
//! are dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Trailing-edge debouncer: only the latest call within the window fires.
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, generation: Arc::new(AtomicU64::new(0)) }
    }

    /// Schedule `f` after the window; a later call supersedes this one.
    pub fn call(&self, f: impl FnOnce() + Send + 'static) {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let window = self.window;

        tokio::spawn(async move {
            tokio::time::sleep(window).await;
            if generation.load(Ordering::SeqCst) == scheduled {
                f();
            }
        });
    }
}

/// Leading-edge throttle: at most one admitted call per window.
pub struct Throttle {
    window: Duration,
    last_admitted: Mutex<Option<Instant>>,
}

impl Throttle {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self { window, last_admitted: Mutex::new(None) }
    }

    /// Whether a call arriving now should run.
    pub fn admit(&self) -> bool {
        let now = Instant::now();
        let mut last = match self.last_admitted.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match *last {
            Some(at) if now.duration_since(at) < self.window => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}
