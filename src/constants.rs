//! Engine-wide constants.
//!
//! Centralizes magic numbers and default values so the interaction math,
//! the item model and the exporters agree on them.

use crate::types::ItemKind;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom step for the zoom-in / zoom-out actions
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom step applied per scroll wheel event
pub const WHEEL_ZOOM_STEP: f32 = 0.05;

/// Zoom is rounded to this many steps per unit (two decimals)
pub const ZOOM_PRECISION: f32 = 100.0;

// ============================================================================
// Board Geometry
// ============================================================================

/// Logical size of the board surface in board units
pub const BOARD_SIZE: (f32, f32) = (6000.0, 4000.0);

/// Board-space position every newly added item starts at
pub const DEFAULT_ITEM_POSITION: (f32, f32) = (100.0, 100.0);

/// Minimum item width and height after any resize
pub const MIN_ITEM_SIZE: f32 = 60.0;

/// Side of the square resize handle, in board units
pub const RESIZE_HANDLE_SIZE: f32 = 16.0;

/// Base dot grid spacing in screen pixels at zoom 1.0
pub const DOT_SPACING: f32 = 24.0;

/// Dot grid spacing never drops below this many screen pixels
pub const MIN_DOT_SPACING: f32 = 16.0;

// ============================================================================
// Item Defaults
// ============================================================================

pub const IMAGE_SIZE: (f32, f32) = (320.0, 220.0);
pub const NOTE_SIZE: (f32, f32) = (240.0, 140.0);
pub const DOCUMENT_SIZE: (f32, f32) = (200.0, 140.0);
pub const COMMENT_SIZE: (f32, f32) = (240.0, 160.0);
pub const LINK_SIZE: (f32, f32) = (300.0, 100.0);
pub const AUDIO_SIZE: (f32, f32) = (300.0, 80.0);
pub const VIDEO_SIZE: (f32, f32) = (480.0, 270.0);

/// Swatch size when the bands run left to right
pub const SWATCH_SIZE_HORIZONTAL: (f32, f32) = (240.0, 110.0);

/// Swatch size when the bands run top to bottom
pub const SWATCH_SIZE_VERTICAL: (f32, f32) = (110.0, 240.0);

pub const DEFAULT_NOTE_TEXT: &str = "New note";
pub const DEFAULT_COMMENT_TEXT: &str = "New comment";
pub const DEFAULT_DOCUMENT_TITLE: &str = "Document";
pub const DEFAULT_DOCUMENT_TEXT: &str = "<p>Start writing</p>";
pub const DEFAULT_LINK_TITLE: &str = "Link";
pub const DEFAULT_MEDIA_TITLE: &str = "Untitled";
pub const VOICE_NOTE_TITLE: &str = "Voice Note";

/// Default size for an item of the given kind (swatches default to vertical)
pub fn default_size(kind: ItemKind) -> (f32, f32) {
    match kind {
        ItemKind::Image => IMAGE_SIZE,
        ItemKind::Note => NOTE_SIZE,
        ItemKind::Document => DOCUMENT_SIZE,
        ItemKind::Comment => COMMENT_SIZE,
        ItemKind::Link => LINK_SIZE,
        ItemKind::Swatch => SWATCH_SIZE_VERTICAL,
        ItemKind::Audio => AUDIO_SIZE,
        ItemKind::Video => VIDEO_SIZE,
    }
}

// ============================================================================
// Colors (default hex values)
// ============================================================================

pub const COLOR_RED: &str = "#D84040";
pub const COLOR_DARK_RED: &str = "#A31D1D";
pub const COLOR_SAND: &str = "#ECDCBF";
pub const COLOR_CREAM: &str = "#F8F2DE";

/// Palette stops a fresh palette starts with
pub const DEFAULT_PALETTE: [&str; 3] = [COLOR_RED, COLOR_SAND, COLOR_CREAM];

// ============================================================================
// Export
// ============================================================================

/// Base name for exported files
pub const EXPORT_FILE_STEM: &str = "moodart-board";

/// Heading of the exported HTML page
pub const EXPORT_TITLE: &str = "Moodart Board";

// ============================================================================
// Media
// ============================================================================

/// Message shown when microphone access is refused
pub const MIC_PERMISSION_MESSAGE: &str = "Microphone permission required (HTTPS)";
