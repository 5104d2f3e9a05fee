//! Pointer events as delivered by the host.
//!
//! The host decides what a pointer-down landed on (its ancestry test or
//! [`Board::hit_test`](crate::board::Board::hit_test)) and hands the engine
//! a classified target.

use super::resize::ResizeCorner;
use crate::types::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerButton {
    #[default]
    Primary,
    Secondary,
}

/// What a pointer-down landed on. Exactly one target per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty board, outside every item region
    Background,
    /// An item's body (not its resize handle)
    ItemBody(ItemId),
    /// One of an item's resize handles
    ResizeHandle(ItemId, ResizeCorner),
}

/// Pointer pressed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDown {
    /// Screen position
    pub position: (f32, f32),
    pub button: PointerButton,
    pub target: PointerTarget,
}

impl PointerDown {
    pub fn primary(position: (f32, f32), target: PointerTarget) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
            target,
        }
    }
}
