//! Viewport transform - zoom, pan, coordinate conversion.
//!
//! The board is drawn as `translate(pan) scale(zoom)` with its origin at a
//! fixed anchor (the visual center of the viewport), so zooming magnifies
//! around that anchor rather than around the pointer:
//!
//! ```text
//! screen = anchor + pan + board * zoom
//! board  = (screen - anchor - pan) / zoom
//! ```

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ZOOM, DOT_SPACING, MAX_ZOOM, MIN_DOT_SPACING, MIN_ZOOM, WHEEL_ZOOM_STEP, ZOOM_PRECISION,
    ZOOM_STEP,
};

/// Clamp a zoom request into the allowed range and round it to two
/// decimals to keep repeated steps from drifting.
#[inline]
pub fn clamp_zoom(zoom: f32) -> f32 {
    (zoom.clamp(MIN_ZOOM, MAX_ZOOM) * ZOOM_PRECISION).round() / ZOOM_PRECISION
}

/// Pan offset and zoom factor of the board view.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f32,
    pan: (f32, f32),
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: (0.0, 0.0),
        }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn pan(&self) -> (f32, f32) {
        self.pan
    }

    /// Set the zoom, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Returns true if the
    /// zoom changed. Non-finite requests are ignored.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            tracing::debug!(zoom, "Ignoring non-finite zoom request");
            return false;
        }
        let clamped = clamp_zoom(zoom);
        if clamped == self.zoom {
            return false;
        }
        self.zoom = clamped;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom - ZOOM_STEP)
    }

    /// Apply one scroll wheel event: scrolling up zooms in by a fixed step,
    /// scrolling down zooms out. A zero delta does nothing.
    pub fn apply_wheel(&mut self, delta_y: f32) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        self.set_zoom(self.zoom - delta_y.signum() * WHEEL_ZOOM_STEP)
    }

    /// Back to zoom 1.0 and no pan
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set the pan offset (screen pixels). Pan is unbounded.
    pub fn set_pan(&mut self, pan: (f32, f32)) -> bool {
        if !pan.0.is_finite() || !pan.1.is_finite() || pan == self.pan {
            return false;
        }
        self.pan = pan;
        true
    }

    /// Convert a pointer delta from screen space to board space
    #[inline]
    pub fn screen_delta_to_board_delta(&self, delta: (f32, f32)) -> (f32, f32) {
        (delta.0 / self.zoom, delta.1 / self.zoom)
    }

    /// Convert a screen position to a board position, given the anchor the
    /// board is drawn from
    #[inline]
    pub fn screen_to_board(&self, screen: (f32, f32), anchor: (f32, f32)) -> (f32, f32) {
        (
            (screen.0 - anchor.0 - self.pan.0) / self.zoom,
            (screen.1 - anchor.1 - self.pan.1) / self.zoom,
        )
    }

    /// Convert a board position to a screen position
    #[inline]
    pub fn board_to_screen(&self, board: (f32, f32), anchor: (f32, f32)) -> (f32, f32) {
        (
            board.0 * self.zoom + self.pan.0 + anchor.0,
            board.1 * self.zoom + self.pan.1 + anchor.1,
        )
    }

    /// Dot grid spacing in screen pixels for the current zoom
    pub fn dot_spacing(&self) -> f32 {
        (DOT_SPACING * self.zoom).max(MIN_DOT_SPACING)
    }
}
