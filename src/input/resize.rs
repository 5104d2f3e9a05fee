//! Item resizing.
//!
//! Every corner keeps the opposite corner fixed. East/south edges grow with
//! the pointer and leave the origin alone; west/north edges shrink the size
//! by the pointer delta and move the origin by whatever the size actually
//! lost, so the floor clamp never drags the opposite corner along:
//!
//! ```text
//! east:  w = max(MIN, w0 + dx)                      x = x0
//! west:  w = max(MIN, w0 - dx)                      x = x0 + (w0 - w)
//! south: h = max(MIN, h0 + dy)                      y = y0
//! north: h = max(MIN, h0 - dy)                      y = y0 + (h0 - h)
//! ```
//!
//! The default handle is the southeast one.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_ITEM_SIZE;
use crate::types::ItemId;
use crate::viewport::Viewport;

/// Which corner handle is being dragged
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeCorner {
    NorthWest,
    NorthEast,
    SouthWest,
    #[default]
    SouthEast,
}

impl ResizeCorner {
    fn moves_west_edge(self) -> bool {
        matches!(self, ResizeCorner::NorthWest | ResizeCorner::SouthWest)
    }

    fn moves_north_edge(self) -> bool {
        matches!(self, ResizeCorner::NorthWest | ResizeCorner::NorthEast)
    }
}

/// An in-progress resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    /// Item being resized
    pub item_id: ItemId,
    /// Handle that was grabbed
    pub corner: ResizeCorner,
    /// Screen position of the pointer at resize start
    pub origin_pointer: (f32, f32),
    /// Item size at resize start
    pub origin_size: (f32, f32),
    /// Item position at resize start
    pub origin_position: (f32, f32),
}

impl ResizeGesture {
    pub fn new(
        item_id: ItemId,
        corner: ResizeCorner,
        origin_pointer: (f32, f32),
        origin_position: (f32, f32),
        origin_size: (f32, f32),
    ) -> Self {
        Self {
            item_id,
            corner,
            origin_pointer,
            origin_size,
            origin_position,
        }
    }

    /// Item `(position, size)` for the given pointer screen position.
    pub fn geometry_at(&self, pointer: (f32, f32), viewport: &Viewport) -> ((f32, f32), (f32, f32)) {
        let (dx, dy) = viewport.screen_delta_to_board_delta((
            pointer.0 - self.origin_pointer.0,
            pointer.1 - self.origin_pointer.1,
        ));
        let (x0, y0) = self.origin_position;
        let (w0, h0) = self.origin_size;

        let (x, w) = if self.corner.moves_west_edge() {
            let w = (w0 - dx).max(MIN_ITEM_SIZE);
            (x0 + (w0 - w), w)
        } else {
            (x0, (w0 + dx).max(MIN_ITEM_SIZE))
        };

        let (y, h) = if self.corner.moves_north_edge() {
            let h = (h0 - dy).max(MIN_ITEM_SIZE);
            (y0 + (h0 - h), h)
        } else {
            (y0, (h0 + dy).max(MIN_ITEM_SIZE))
        };

        ((x, y), (w, h))
    }
}
