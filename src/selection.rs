//! Selection and stacking.
//!
//! Exactly zero or one item is selected. Selecting an item always promotes
//! it to the front, so the item most recently interacted with holds the
//! highest z-index.

use crate::board::Board;
use crate::types::ItemId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<ItemId>,
}

impl Selection {
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected == Some(id)
    }

    /// Select `id`, returning the previously selected item
    pub fn set(&mut self, id: ItemId) -> Option<ItemId> {
        self.selected.replace(id)
    }

    pub fn clear(&mut self) -> Option<ItemId> {
        self.selected.take()
    }

    /// Clear only if `id` is the selected item
    pub fn clear_if(&mut self, id: ItemId) -> bool {
        if self.is_selected(id) {
            self.selected = None;
            true
        } else {
            false
        }
    }
}

impl Board {
    /// Select an item and bring it to the front. Unknown ids are ignored.
    pub fn select(&mut self, id: ItemId) -> bool {
        if self.store.bring_to_front(id).is_none() {
            tracing::debug!(item_id = %id, "Select for unknown item ignored");
            return false;
        }
        self.selection.set(id);
        true
    }

    pub fn deselect(&mut self) -> Option<ItemId> {
        self.selection.clear()
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selection.selected()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.is_selected(id)
    }

    /// Promote an item without selecting it
    pub fn bring_to_front(&mut self, id: ItemId) -> Option<u32> {
        self.store.bring_to_front(id)
    }
}
