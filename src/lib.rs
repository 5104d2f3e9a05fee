//! Moodart - the interaction engine of an infinite-canvas moodboard.
//!
//! A [`Board`] owns every piece of canvas state: the item store, the
//! viewport transform, the single selection, the active pointer gesture
//! and the current tool. Hosts feed it pointer, wheel and toolbar events
//! and render [`ItemStore::ordered_for_render`] through
//! [`Board::board_to_screen`] every frame.
//!
//! ## Modules
//!
//! - `board` - the engine and its item actions
//! - `input` - pointer events, the gesture state machine and gesture math
//! - `viewport` - zoom and pan, screen/board mapping
//! - `store` / `spatial_index` - item ownership and hit-test indexing
//! - `media`, `rich_text`, `export` - seams to host-side collaborators

pub mod board;
pub mod constants;
pub mod error;
pub mod export;
mod hit_testing;
pub mod input;
pub mod logging;
pub mod media;
pub mod palette;
pub mod perf;
pub mod rich_text;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod viewport;

pub use board::{Board, ToolMode};
pub use error::{AcquisitionError, ColorError, ExportError, SettingsError};
pub use store::ItemStore;
pub use types::{BoardItem, ItemContent, ItemId, ItemKind, ItemPatch, MediaHandle};
pub use viewport::Viewport;
