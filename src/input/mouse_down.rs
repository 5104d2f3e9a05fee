//! Pointer down handling - selection, gesture start, item placement.
//!
//! Each pointer-down is consumed by exactly one target, so a resize-handle
//! press never also starts a drag on the same item.
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::{DragGesture, GestureKind, InputState, PanGesture, PointerButton, PointerDown};
use super::{PointerTarget, ResizeCorner, ResizeGesture};
use crate::board::{Board, ToolMode};
use crate::profile_scope;
use crate::types::ItemId;

impl Board {
    /// Handle a classified pointer-down. Returns the gesture it started.
    pub fn handle_pointer_down(&mut self, event: &PointerDown) -> Option<GestureKind> {
        profile_scope!("handle_pointer_down");

        if !event.position.0.is_finite() || !event.position.1.is_finite() {
            return None;
        }

        if let Some(active) = self.input_state.kind() {
            tracing::debug!(?active, "Pointer down during active gesture ignored");
            return None;
        }

        match event.target {
            PointerTarget::Background => self.pointer_down_on_background(event),
            PointerTarget::ItemBody(id) => self.start_drag(id, event.position),
            PointerTarget::ResizeHandle(id, corner) => self.start_resize(id, corner, event.position),
        }
    }

    fn pointer_down_on_background(&mut self, event: &PointerDown) -> Option<GestureKind> {
        self.end_editing();
        self.deselect();

        if event.button != PointerButton::Primary {
            return None;
        }

        match self.tool {
            ToolMode::Place(kind) => {
                let at = self.screen_to_board(event.position);
                let id = self.place_item(kind, at);
                tracing::debug!(item_id = %id, ?kind, "Placed item from tool");
                self.tool = ToolMode::Select;
                None
            }
            ToolMode::Select => {
                self.input_state =
                    InputState::Panning(PanGesture::new(event.position, self.viewport.pan()));
                Some(GestureKind::Pan)
            }
        }
    }

    fn start_drag(&mut self, id: ItemId, pointer: (f32, f32)) -> Option<GestureKind> {
        let position = match self.store.get(id) {
            Some(item) => item.position,
            None => {
                tracing::debug!(item_id = %id, "Pointer down on unknown item ignored");
                return None;
            }
        };

        // An item being edited keeps the pointer for its own text caret
        if self.editing == Some(id) {
            return None;
        }

        self.end_editing();
        self.select(id);
        self.input_state = InputState::Dragging(DragGesture::new(id, pointer, position));
        self.text_selection_suppressed = true;
        Some(GestureKind::Drag)
    }

    fn start_resize(
        &mut self,
        id: ItemId,
        corner: ResizeCorner,
        pointer: (f32, f32),
    ) -> Option<GestureKind> {
        let Some(item) = self.store.get(id) else {
            tracing::debug!(item_id = %id, "Resize on unknown item ignored");
            return None;
        };

        let gesture = ResizeGesture::new(id, corner, pointer, item.position, item.size);
        self.end_editing();
        self.input_state = InputState::Resizing(gesture);
        self.text_selection_suppressed = true;
        Some(GestureKind::Resize)
    }
}
