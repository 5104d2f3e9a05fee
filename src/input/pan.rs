//! Board panning.
//!
//! Pan lives in screen space, so pointer deltas are applied as-is and are
//! not divided by the zoom factor.

/// An in-progress pan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanGesture {
    /// Screen position of the pointer at pan start
    pub origin_pointer: (f32, f32),
    /// Viewport pan offset at pan start
    pub origin_pan: (f32, f32),
}

impl PanGesture {
    pub fn new(origin_pointer: (f32, f32), origin_pan: (f32, f32)) -> Self {
        Self {
            origin_pointer,
            origin_pan,
        }
    }

    /// Pan offset for the given pointer screen position
    pub fn pan_at(&self, pointer: (f32, f32)) -> (f32, f32) {
        (
            self.origin_pan.0 + (pointer.0 - self.origin_pointer.0),
            self.origin_pan.1 + (pointer.1 - self.origin_pointer.1),
        )
    }
}
