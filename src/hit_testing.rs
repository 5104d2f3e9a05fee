//! Hit testing - classify a screen point into a pointer target.
//!
//! Hosts with a retained element tree classify pointer-downs by ancestry
//! and never need this. Hosts that only see raw coordinates call
//! [`Board::hit_test`] and feed the result into
//! [`Board::handle_pointer_down`].
//!
//! Uses the R-tree spatial index for O(log n) candidate lookup, then paint
//! order to pick the topmost item.

use crate::board::Board;
use crate::constants::RESIZE_HANDLE_SIZE;
use crate::input::{PointerTarget, ResizeCorner};
use crate::profile_scope;

impl Board {
    /// Classify a screen point. The resize handle is only offered for the
    /// selected item and takes priority over any item body.
    pub fn hit_test(&self, screen: (f32, f32)) -> PointerTarget {
        profile_scope!("hit_test");

        let (x, y) = self.screen_to_board(screen);

        if let Some(item) = self.selected().and_then(|id| self.store.get(id)) {
            let (corner_x, corner_y) = item.max_corner();
            let half = RESIZE_HANDLE_SIZE / 2.0;
            if (x - corner_x).abs() <= half && (y - corner_y).abs() <= half {
                return PointerTarget::ResizeHandle(item.id, ResizeCorner::SouthEast);
            }
        }

        match self.store.item_at(x, y) {
            Some(item) => PointerTarget::ItemBody(item.id),
            None => PointerTarget::Background,
        }
    }
}
