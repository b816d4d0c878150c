//! Horizontal drag bounds for the project carousel.
//!
//! The track is translated by a non-positive x offset: `0` keeps the first
//! card flush with the viewport's left edge, `-max_drag_offset` shows the
//! last card flush with the right edge.

#[cfg(test)]
#[path = "drag_bounds_test.rs"]
mod drag_bounds_test;

/// Measured drag range for one carousel layout.
///
/// Only built through [`CarouselBounds::measure`] or `Default`, so the range
/// is always finite and non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CarouselBounds {
    max_drag_offset: f64,
}

impl CarouselBounds {
    /// Bounds for a track of `content_width` inside a viewport of `viewport_width`.
    pub fn measure(content_width: f64, viewport_width: f64) -> Self {
        Self { max_drag_offset: max_drag_offset(content_width, viewport_width) }
    }

    pub fn max_drag_offset(self) -> f64 {
        self.max_drag_offset
    }

    /// Leftmost permitted offset. A range that is not a finite positive
    /// number collapses to `0`.
    fn min_offset(self) -> f64 {
        let max = self.max_drag_offset;
        if max.is_finite() && max > 0.0 { -max } else { 0.0 }
    }
}

/// Overflow of the track past the viewport, never negative.
pub fn max_drag_offset(content_width: f64, viewport_width: f64) -> f64 {
    let overflow = content_width - viewport_width;
    if overflow.is_finite() && overflow > 0.0 { overflow } else { 0.0 }
}

/// Clamp an offset into `[-max_drag_offset, 0]`. Non-finite offsets snap to `0`.
pub fn clamp_offset(offset: f64, bounds: CarouselBounds) -> f64 {
    if !offset.is_finite() {
        return 0.0;
    }
    offset.clamp(bounds.min_offset(), 0.0)
}

/// One pointer gesture on the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub pointer_id: i32,
    pub start_x: f64,
    pub origin_offset: f64,
}

impl DragSession {
    pub fn begin(pointer_id: i32, start_x: f64, origin_offset: f64) -> Self {
        Self { pointer_id, start_x, origin_offset }
    }

    /// Offset for the pointer at `current_x`, kept inside `bounds`.
    pub fn offset_at(&self, current_x: f64, bounds: CarouselBounds) -> f64 {
        clamp_offset(self.origin_offset + (current_x - self.start_x), bounds)
    }
}

pub fn track_transform(offset: f64) -> String {
    format!("transform: translateX({offset}px);")
}
