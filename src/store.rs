//! Item store - the single owner of every board item.
//!
//! Items are kept in insertion order. All mutation after creation goes
//! through [`ItemStore::patch`], [`ItemStore::remove`] and
//! [`ItemStore::bring_to_front`]; unknown ids are a no-op there, since a
//! stale callback can legitimately fire after its item was removed.

use crate::constants::DEFAULT_ITEM_POSITION;
use crate::spatial_index::SpatialIndex;
use crate::types::{BoardItem, ItemContent, ItemId, ItemPatch};

#[derive(Default)]
pub struct ItemStore {
    items: Vec<BoardItem>,
    spatial: SpatialIndex,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item at the default position with its kind's default
    /// size. Its `z_index` is the item count before insertion.
    pub fn create(&mut self, content: ItemContent) -> ItemId {
        let size = content.default_size();
        self.create_at(content, DEFAULT_ITEM_POSITION, size)
    }

    /// Append a new item with explicit geometry. A swatch without colors
    /// gets the default palette.
    pub fn create_at(&mut self, content: ItemContent, position: (f32, f32), size: (f32, f32)) -> ItemId {
        let id = ItemId::next();
        let content = content.normalized();
        let mut item = BoardItem {
            id,
            position: DEFAULT_ITEM_POSITION,
            size: content.default_size(),
            z_index: self.items.len() as u32,
            content,
        };
        // Route geometry through the patch rules so the size floor holds.
        ItemPatch::geometry(position, size).apply_to(&mut item);

        tracing::debug!(item_id = %id, kind = item.kind().label(), "Created item");
        self.spatial.upsert(&item);
        self.items.push(item);
        id
    }

    /// Merge a partial update into an item. Returns false if the id is
    /// unknown or nothing changed.
    pub fn patch(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(item_id = %id, "Patch for unknown item ignored");
            return false;
        };

        let changed = patch.apply_to(item);
        if changed && (patch.position.is_some() || patch.size.is_some()) {
            self.spatial.upsert(item);
        }
        changed
    }

    /// Delete an item, returning it if it existed.
    pub fn remove(&mut self, id: ItemId) -> Option<BoardItem> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            tracing::debug!(item_id = %id, "Remove for unknown item ignored");
            return None;
        };
        self.spatial.remove(id);
        Some(self.items.remove(index))
    }

    /// Move an item above every other item: `z_index = max + 1`.
    /// Returns the new z-index, or None if the id is unknown.
    pub fn bring_to_front(&mut self, id: ItemId) -> Option<u32> {
        let front = self.max_z_index().map_or(0, |max| max + 1);
        let item = self.items.iter_mut().find(|item| item.id == id)?;
        item.z_index = front;
        Some(front)
    }

    /// Highest z-index in the store, None when empty
    pub fn max_z_index(&self) -> Option<u32> {
        self.items.iter().map(|item| item.z_index).max()
    }

    /// Items in paint order: ascending z-index, ties in insertion order.
    /// The last item is drawn on top and wins pointer targeting.
    pub fn ordered_for_render(&self) -> Vec<&BoardItem> {
        let mut ordered: Vec<&BoardItem> = self.items.iter().collect();
        ordered.sort_by_key(|item| item.z_index);
        ordered
    }

    /// Topmost item whose bounds contain the board point.
    pub fn item_at(&self, x: f32, y: f32) -> Option<&BoardItem> {
        let candidates = self.spatial.query_point(x, y);
        if candidates.is_empty() {
            return None;
        }
        self.ordered_for_render()
            .into_iter()
            .rev()
            .find(|item| candidates.contains(&item.id))
    }

    /// Items intersecting a board-space rectangle, in paint order.
    pub fn items_in_rect(&self, min: (f32, f32), max: (f32, f32)) -> Vec<&BoardItem> {
        let hits = self.spatial.query_rect(min.0, min.1, max.0, max.1);
        self.ordered_for_render()
            .into_iter()
            .filter(|item| hits.contains(&item.id))
            .collect()
    }

    pub fn get(&self, id: ItemId) -> Option<&BoardItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &BoardItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item
    pub fn clear(&mut self) {
        self.items.clear();
        self.spatial.clear();
    }
}
