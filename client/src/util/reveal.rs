//! Entrance transitions and the once-only reveal flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections start hidden and switch to their visible style exactly once.
//! The trigger is either the first viewport intersection past a threshold
//! (`RevealState`) or hydration itself for above-the-fold chrome.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Visibility ratio that reveals a section when none is given.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// Hidden-state geometry and timing for one entrance transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Entrance {
    /// Vertical offset while hidden; positive is downward.
    pub offset_y_px: f64,
    /// Scale while hidden.
    pub scale: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Entrance {
    pub const SECTION: Self = Self { offset_y_px: 16.0, scale: 1.0, duration_ms: 600, delay_ms: 0 };
    pub const HEADER: Self = Self { offset_y_px: -8.0, scale: 1.0, duration_ms: 600, delay_ms: 0 };
    pub const RISE: Self = Self { offset_y_px: 8.0, scale: 1.0, duration_ms: 600, delay_ms: 0 };
    pub const FADE: Self = Self { offset_y_px: 0.0, scale: 1.0, duration_ms: 600, delay_ms: 0 };
    pub const POP: Self = Self { offset_y_px: 0.0, scale: 0.99, duration_ms: 600, delay_ms: 0 };

    #[must_use]
    pub const fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }
}

/// Inline style for `entrance` in its hidden or revealed state.
pub fn entrance_style(entrance: Entrance, revealed: bool) -> String {
    let transition = format!(
        "transition: opacity {d}ms ease-out {w}ms, transform {d}ms ease-out {w}ms;",
        d = entrance.duration_ms,
        w = entrance.delay_ms
    );
    if revealed {
        return format!("opacity: 1; transform: none; {transition}");
    }
    format!(
        "opacity: 0; transform: translateY({y}px) scale({s}); {transition}",
        y = entrance.offset_y_px,
        s = entrance.scale
    )
}

/// Once-only reveal flag fed by intersection observations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl RevealState {
    /// Threshold is clamped into `[0, 1]`; NaN falls back to the default.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, revealed: false }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Feed one observation. Returns `true` only on the call that reveals.
    pub fn observe(&mut self, intersection_ratio: f64, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting || intersection_ratio < self.threshold {
            return false;
        }
        self.revealed = true;
        true
    }
}
