//! Input state machine - one value for the active pointer gesture.
//!
//! Dragging, resizing and panning are variants of a single enum, so at most
//! one of them can be active at any instant.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning      (primary pointer down on background, select mode)
//! Idle -> Dragging     (pointer down on an item body)
//! Idle -> Resizing     (pointer down on an item resize handle)
//!
//! Any -> Idle          (pointer up anywhere)
//! ```

use super::drag::DragGesture;
use super::pan::PanGesture;
use super::resize::ResizeGesture;
use crate::types::ItemId;

/// Which kind of gesture is (or was) active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Drag,
    Resize,
    Pan,
}

/// The active pointer gesture
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Moving an item
    Dragging(DragGesture),

    /// Resizing an item from one corner
    Resizing(ResizeGesture),

    /// Moving the viewport
    Panning(PanGesture),
}

impl InputState {
    /// Returns true if any gesture is active
    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning(_))
    }

    pub fn kind(&self) -> Option<GestureKind> {
        match self {
            Self::Idle => None,
            Self::Dragging(_) => Some(GestureKind::Drag),
            Self::Resizing(_) => Some(GestureKind::Resize),
            Self::Panning(_) => Some(GestureKind::Pan),
        }
    }

    /// Get the item ID being dragged, if any
    pub fn dragged_item_id(&self) -> Option<ItemId> {
        match self {
            Self::Dragging(gesture) => Some(gesture.item_id),
            _ => None,
        }
    }

    /// Get the item ID being resized, if any
    pub fn resized_item_id(&self) -> Option<ItemId> {
        match self {
            Self::Resizing(gesture) => Some(gesture.item_id),
            _ => None,
        }
    }

    /// Item targeted by the active gesture
    pub fn target_item(&self) -> Option<ItemId> {
        self.dragged_item_id().or_else(|| self.resized_item_id())
    }

    /// Reset to Idle, returning what was active
    pub fn reset(&mut self) -> Option<GestureKind> {
        let kind = self.kind();
        *self = Self::Idle;
        kind
    }
}
