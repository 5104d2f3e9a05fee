//! Item dragging.
//!
//! The item position is always recomputed from the pointer and item
//! positions captured at pointer-down, never accumulated per move event, so
//! any number of small moves lands exactly where one large move would.

use crate::types::ItemId;
use crate::viewport::Viewport;

/// An in-progress item drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    /// Item being dragged
    pub item_id: ItemId,
    /// Screen position of the pointer at drag start
    pub origin_pointer: (f32, f32),
    /// Board position of the item at drag start
    pub origin_position: (f32, f32),
}

impl DragGesture {
    pub fn new(item_id: ItemId, origin_pointer: (f32, f32), origin_position: (f32, f32)) -> Self {
        Self {
            item_id,
            origin_pointer,
            origin_position,
        }
    }

    /// Board position of the item for the given pointer screen position.
    pub fn position_at(&self, pointer: (f32, f32), viewport: &Viewport) -> (f32, f32) {
        let (dx, dy) = viewport.screen_delta_to_board_delta((
            pointer.0 - self.origin_pointer.0,
            pointer.1 - self.origin_pointer.1,
        ));
        (self.origin_position.0 + dx, self.origin_position.1 + dy)
    }
}
