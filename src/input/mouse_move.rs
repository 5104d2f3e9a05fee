//! Pointer move handling - apply the active drag, resize or pan.
//!
//! Every move recomputes the result from the gesture origin, and every
//! write goes through the item store or the viewport.

use super::InputState;
use crate::board::Board;
use crate::profile_scope;
use crate::types::ItemPatch;

impl Board {
    /// Handle pointer movement (screen coordinates). Returns true if board
    /// state changed and the host should redraw.
    pub fn handle_pointer_move(&mut self, position: (f32, f32)) -> bool {
        profile_scope!("handle_pointer_move");

        if !position.0.is_finite() || !position.1.is_finite() {
            return false;
        }

        match self.input_state {
            InputState::Idle => false,
            InputState::Dragging(gesture) => {
                let (x, y) = gesture.position_at(position, &self.viewport);
                tracing::trace!(item_id = %gesture.item_id, x, y, "Drag");
                self.store.patch(gesture.item_id, &ItemPatch::position(x, y))
            }
            InputState::Resizing(gesture) => {
                let (origin, size) = gesture.geometry_at(position, &self.viewport);
                tracing::trace!(item_id = %gesture.item_id, w = size.0, h = size.1, "Resize");
                self.store.patch(gesture.item_id, &ItemPatch::geometry(origin, size))
            }
            InputState::Panning(gesture) => {
                let pan = gesture.pan_at(position);
                tracing::trace!(x = pan.0, y = pan.1, "Pan");
                self.viewport.set_pan(pan)
            }
        }
    }
}
