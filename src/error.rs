//! Error types for the board engine.
//!
//! Out-of-range input (zoom, resize below the floor) and dangling item ids
//! are not errors: they are clamped or ignored where they happen. The enums
//! here cover the failures a host has to show to the user.

use thiserror::Error;

use crate::constants::MIC_PERMISSION_MESSAGE;

/// Outcome of a failed media acquisition (file pick or microphone capture)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AcquisitionError {
    /// The user dismissed the picker without choosing anything
    #[error("No file chosen")]
    Cancelled,

    /// Microphone access was refused
    #[error("{}", MIC_PERMISSION_MESSAGE)]
    PermissionDenied,

    /// Reading or recording failed
    #[error("Media acquisition failed: {0}")]
    Failed(String),
}

/// Errors that can occur while exporting the board
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export
    #[error("Board is empty - add some items first!")]
    EmptyBoard,

    /// The exporter cannot produce the requested format
    #[error("Export format not supported by this exporter: {0}")]
    UnsupportedFormat(&'static str),

    /// The rendering pipeline failed
    #[error("Export failed: {0}")]
    Render(String),

    /// IO error while writing the artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A color string that is not a usable hex color
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid color: {0:?} (expected #rgb or #rrggbb)")]
    Invalid(String),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
