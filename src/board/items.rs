//! Item actions - creation, media completion, removal, clearing and text
//! editing focus.
//!
//! Every new item lands at the default board position with its kind's
//! default size and becomes the selected, frontmost item.

use super::Board;
use crate::constants::{DEFAULT_MEDIA_TITLE, VOICE_NOTE_TITLE};
use crate::error::AcquisitionError;
use crate::media::{AcquiredMedia, MediaRequest, MediaSource};
use crate::palette::{Color, Palette};
use crate::types::{
    BoardItem, ItemContent, ItemId, ItemKind, ItemPatch, MediaHandle, SwatchOrientation,
};

impl Board {
    // ========================================================================
    // Creation
    // ========================================================================

    /// Create an item at the default position and select it.
    pub fn add_item(&mut self, content: ItemContent) -> ItemId {
        let id = self.store.create(content);
        self.adopt_new_item(id);
        id
    }

    /// Select a freshly created item. Its `z_index` (the prior item count)
    /// is kept unless an earlier promotion already reached that height.
    fn adopt_new_item(&mut self, id: ItemId) {
        let z_index = self.store.get(id).map(|item| item.z_index);
        let covered = self
            .store
            .iter()
            .any(|other| other.id != id && Some(other.z_index) >= z_index);
        if covered {
            self.store.bring_to_front(id);
        }
        self.selection.set(id);
    }

    pub fn add_note(&mut self) -> ItemId {
        self.add_item(ItemContent::new_default(ItemKind::Note))
    }

    pub fn add_document(&mut self) -> ItemId {
        self.add_item(ItemContent::new_default(ItemKind::Document))
    }

    pub fn add_comment(&mut self) -> ItemId {
        self.add_item(ItemContent::new_default(ItemKind::Comment))
    }

    pub fn add_link(&mut self) -> ItemId {
        self.add_item(ItemContent::new_default(ItemKind::Link))
    }

    /// Add a swatch sized for its orientation. An empty color list falls
    /// back to the default palette.
    pub fn add_swatch(&mut self, colors: &[Color], orientation: SwatchOrientation) -> ItemId {
        self.add_item(ItemContent::swatch(colors.to_vec(), orientation))
    }

    pub fn add_swatch_from_palette(&mut self, palette: &Palette) -> ItemId {
        self.add_swatch(palette.stops(), palette.orientation())
    }

    /// Place a default item of `kind` with its top-left corner at `at`
    /// (board space) and select it.
    pub fn place_item(&mut self, kind: ItemKind, at: (f32, f32)) -> ItemId {
        let content = ItemContent::new_default(kind);
        let size = content.default_size();
        let id = self.store.create_at(content, at, size);
        self.adopt_new_item(id);
        id
    }

    // ========================================================================
    // Media
    // ========================================================================

    /// Create a provisional image ahead of a file pick. It stays a
    /// placeholder until [`Board::complete_image_pick`] runs.
    pub fn add_image(&mut self) -> ItemId {
        // Only one pick can be outstanding; an abandoned placeholder goes
        if let Some(previous) = self.pending_image.take() {
            if self.store.get(previous).is_some_and(|item| item.content.is_placeholder()) {
                self.remove_item(previous);
            }
        }

        let id = self.add_item(ItemContent::new_default(ItemKind::Image));
        self.pending_image = Some(id);
        id
    }

    /// Finish an image pick. On failure the provisional item is removed so
    /// no empty image is left behind; on success its `src` is set (or a new
    /// image is created if the provisional item is gone).
    pub fn complete_image_pick(
        &mut self,
        outcome: Result<AcquiredMedia, AcquisitionError>,
    ) -> Result<ItemId, AcquisitionError> {
        let pending = self.pending_image.take();

        match outcome {
            Ok(media) => {
                if let Some(id) = pending.filter(|id| self.store.contains(*id)) {
                    self.store.patch(id, &ItemPatch::src(media.handle));
                    return Ok(id);
                }
                Ok(self.add_item(ItemContent::Image { src: media.handle }))
            }
            Err(err) => {
                if let Some(id) = pending {
                    if self.store.get(id).is_some_and(|item| item.content.is_placeholder()) {
                        self.remove_item(id);
                    }
                }
                tracing::warn!(error = %err, "Image pick did not produce a file");
                Err(err)
            }
        }
    }

    /// Run a full image pick through a host media source.
    pub fn pick_image(&mut self, source: &mut dyn MediaSource) -> Result<ItemId, AcquisitionError> {
        self.add_image();
        let outcome = source.acquire(MediaRequest::ImageFile);
        self.complete_image_pick(outcome)
    }

    /// Acquire an audio file and add it, titled by file name.
    pub fn pick_audio(&mut self, source: &mut dyn MediaSource) -> Result<ItemId, AcquisitionError> {
        let media = source.acquire(MediaRequest::AudioFile).inspect_err(|err| {
            tracing::warn!(error = %err, "Audio pick did not produce a file");
        })?;
        Ok(self.add_audio(media))
    }

    /// Acquire a video file and add it, titled by file name.
    pub fn pick_video(&mut self, source: &mut dyn MediaSource) -> Result<ItemId, AcquisitionError> {
        let media = source.acquire(MediaRequest::VideoFile).inspect_err(|err| {
            tracing::warn!(error = %err, "Video pick did not produce a file");
        })?;
        Ok(self.add_video(media))
    }

    pub fn add_audio(&mut self, media: AcquiredMedia) -> ItemId {
        let title = media.title_or(DEFAULT_MEDIA_TITLE);
        self.add_item(ItemContent::Audio {
            src: media.handle,
            title,
        })
    }

    pub fn add_video(&mut self, media: AcquiredMedia) -> ItemId {
        let title = media.title_or(DEFAULT_MEDIA_TITLE);
        self.add_item(ItemContent::Video {
            src: media.handle,
            title,
        })
    }

    /// Add a finished voice recording as an audio item.
    pub fn add_voice_note(&mut self, clip: MediaHandle) -> ItemId {
        self.add_item(ItemContent::Audio {
            src: clip,
            title: VOICE_NOTE_TITLE.to_string(),
        })
    }

    // ========================================================================
    // Mutation & removal
    // ========================================================================

    /// Patch an item through the store. Unknown ids are a no-op.
    pub fn patch_item(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        self.store.patch(id, patch)
    }

    /// Remove an item. Clears selection, editing focus and the provisional
    /// image slot when they point at it.
    pub fn remove_item(&mut self, id: ItemId) -> Option<BoardItem> {
        let removed = self.store.remove(id)?;
        self.selection.clear_if(id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        if self.pending_image == Some(id) {
            self.pending_image = None;
        }
        Some(removed)
    }

    /// Remove the selected item, if any
    pub fn remove_selected(&mut self) -> Option<BoardItem> {
        let id = self.selected()?;
        self.remove_item(id)
    }

    /// Remove every item and reset selection, editing and any active
    /// gesture. Returns how many items were removed.
    pub fn clear(&mut self) -> usize {
        let count = self.store.len();
        self.input_state.reset();
        self.text_selection_suppressed = false;
        self.store.clear();
        self.selection.clear();
        self.editing = None;
        self.pending_image = None;
        tracing::info!(count, "Board cleared");
        count
    }

    // ========================================================================
    // Text editing
    // ========================================================================

    /// Give an item text-editing focus. Only text-bearing kinds can be
    /// edited; returns false otherwise.
    pub fn begin_editing(&mut self, id: ItemId) -> bool {
        let editable = self.store.get(id).is_some_and(|item| {
            matches!(
                item.kind(),
                ItemKind::Note | ItemKind::Document | ItemKind::Comment | ItemKind::Link
            )
        });
        if editable {
            self.editing = Some(id);
        }
        editable
    }

    pub fn end_editing(&mut self) -> Option<ItemId> {
        self.editing.take()
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }
}
