//! The board engine - owns every piece of canvas state.
//!
//! This module is organized into several parts:
//! - `mod.rs` - the `Board` struct, tool mode, lifecycle and accessors
//! - `items` - item creation, removal, media completion and text editing
//! - `view` - zoom actions, viewport size and dot grid
//!
//! Pointer handling lives in [`crate::input`], selection in
//! [`crate::selection`] and hit testing in [`crate::hit_testing`]; all of
//! them are `impl Board` blocks working on the same state.

mod items;
mod view;

use crate::input::InputState;
use crate::selection::Selection;
use crate::settings::Settings;
use crate::store::ItemStore;
use crate::types::{ItemId, ItemKind};
use crate::viewport::Viewport;

/// Active tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToolMode {
    /// Select items, drag them, pan on empty board
    #[default]
    Select,
    /// The next background click places an item of this kind
    Place(ItemKind),
}

/// An infinite-canvas board: items, viewport, selection and the active
/// gesture. Independent instances share nothing but the id counter.
pub struct Board {
    /// Single source of truth for items
    pub(crate) store: ItemStore,
    /// Pan and zoom
    pub(crate) viewport: Viewport,
    /// At most one selected item
    pub(crate) selection: Selection,
    /// Input state machine for the active gesture
    pub(crate) input_state: InputState,
    /// Current tool
    pub(crate) tool: ToolMode,
    /// Item whose text is being edited; it consumes its own pointer-downs
    pub(crate) editing: Option<ItemId>,
    /// Image created ahead of a file pick, removed if the pick fails
    pub(crate) pending_image: Option<ItemId>,
    /// Host should disable text selection while this is set
    pub(crate) text_selection_suppressed: bool,
    /// Size of the visible viewport in screen pixels
    pub(crate) viewport_size: (f32, f32),
    /// Whether the dot grid is drawn
    pub(crate) show_grid: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            store: ItemStore::new(),
            viewport: Viewport::default(),
            selection: Selection::default(),
            input_state: InputState::default(),
            tool: ToolMode::default(),
            editing: None,
            pending_image: None,
            text_selection_suppressed: false,
            viewport_size: (0.0, 0.0),
            show_grid: true,
        }
    }

    /// Create a board honoring user preferences
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            show_grid: settings.show_grid,
            ..Self::new()
        }
    }

    /// Read-only view of the items
    pub fn items(&self) -> &ItemStore {
        &self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn tool(&self) -> ToolMode {
        self.tool
    }

    /// Switch tools. Switching to `Select` this way keeps the selection;
    /// use [`Board::enter_select_mode`] for the explicit toolbar action.
    pub fn set_tool(&mut self, tool: ToolMode) {
        self.tool = tool;
    }

    /// Explicitly (re-)enter select mode, clearing the selection.
    pub fn enter_select_mode(&mut self) {
        self.tool = ToolMode::Select;
        self.deselect();
    }

    /// Whether the host should suppress text selection (during drag/resize)
    pub fn is_text_selection_suppressed(&self) -> bool {
        self.text_selection_suppressed
    }

    pub fn pending_image(&self) -> Option<ItemId> {
        self.pending_image
    }
}
