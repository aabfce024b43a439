//! Hover-intent timing for collapsed-sidebar flyouts.
//!
//! DESIGN
//! ======
//! Opening is fast, closing is slow: the open delay filters accidental
//! passes over an item, while the longer close delay lets the pointer cross
//! the gap between a menu item and its flyout without the flyout flickering
//! shut. The policy is a pure state machine over millisecond timestamps so
//! it can be tested without timers; components feed it real clock readings
//! and a timer tick.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

const DEFAULT_OPEN_DELAY_MS: u64 = 80;
const DEFAULT_CLOSE_DELAY_MS: u64 = 250;

/// Asymmetric open/close delays. Invariant: open is shorter than close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlyoutTiming {
    pub open_delay_ms: u64,
    pub close_delay_ms: u64,
}

impl Default for FlyoutTiming {
    fn default() -> Self {
        Self { open_delay_ms: DEFAULT_OPEN_DELAY_MS, close_delay_ms: DEFAULT_CLOSE_DELAY_MS }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    /// Pointer entered; opens once the open delay elapses.
    Opening { since_ms: u64 },
    Open,
    /// Pointer left while open; closes once the close delay elapses.
    Closing { since_ms: u64 },
}

/// Per-item transient hover state, layered outside the layout reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverIntent {
    timing: FlyoutTiming,
    phase: Phase,
}

impl HoverIntent {
    #[must_use]
    pub fn new(timing: FlyoutTiming) -> Self {
        Self { timing, phase: Phase::Closed }
    }

    /// Pointer entered the item (or its flyout) at `now_ms`.
    pub fn on_enter(&mut self, now_ms: u64) {
        self.phase = match self.phase {
            // Re-entering during the close grace period keeps the flyout
            // open without restarting the open delay.
            Phase::Open | Phase::Closing { .. } => Phase::Open,
            Phase::Closed => Phase::Opening { since_ms: now_ms },
            opening @ Phase::Opening { .. } => opening,
        };
    }

    /// Pointer left the item and its flyout at `now_ms`.
    pub fn on_leave(&mut self, now_ms: u64) {
        self.phase = match self.phase {
            Phase::Open => Phase::Closing { since_ms: now_ms },
            // Leaving before the open delay fired cancels the pending open.
            Phase::Opening { .. } | Phase::Closed => Phase::Closed,
            closing @ Phase::Closing { .. } => closing,
        };
    }

    /// Outside interaction (click elsewhere, Escape) dismisses immediately.
    pub fn dismiss(&mut self) {
        self.phase = Phase::Closed;
    }

    /// Advance pending transitions and report whether the flyout is open.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::Opening { since_ms } if now_ms.saturating_sub(since_ms) >= self.timing.open_delay_ms => {
                self.phase = Phase::Open;
            }
            Phase::Closing { since_ms } if now_ms.saturating_sub(since_ms) >= self.timing.close_delay_ms => {
                self.phase = Phase::Closed;
            }
            _ => {}
        }
        matches!(self.phase, Phase::Open | Phase::Closing { .. })
    }
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new(FlyoutTiming::default())
    }
}
