//! Board export - snapshot the board and hand it to an exporter.
//!
//! Rasterizing and PDF layout belong to the host's rendering stack, so the
//! engine only defines the [`Exporter`] seam and ships one self-contained
//! implementation, [`HtmlExporter`], that re-emits the board as a static
//! page.

mod html;

pub use html::{HtmlExporter, escape_html};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::constants::{BOARD_SIZE, EXPORT_FILE_STEM};
use crate::error::{ExportError, ExportResult};
use crate::types::BoardItem;

/// Output format
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Jpeg => "JPG",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Html => "HTML",
        }
    }

    /// Raster and PDF output depend on the export size; HTML does not
    pub fn is_sized(&self) -> bool {
        !matches!(self, ExportFormat::Html)
    }
}

/// Output resolution preset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportSize {
    Small,
    Medium,
    Large,
    #[default]
    Original,
}

impl ExportSize {
    pub fn all() -> &'static [ExportSize] {
        &[
            ExportSize::Small,
            ExportSize::Medium,
            ExportSize::Large,
            ExportSize::Original,
        ]
    }

    /// Device pixels per board unit
    pub fn pixel_ratio(&self) -> f32 {
        match self {
            ExportSize::Small => 1.0,
            ExportSize::Medium => 1.5,
            ExportSize::Large => 2.0,
            ExportSize::Original => 2.5,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ExportSize::Small => "small",
            ExportSize::Medium => "medium",
            ExportSize::Large => "large",
            ExportSize::Original => "original",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub size: ExportSize,
}

impl ExportRequest {
    pub fn new(format: ExportFormat, size: ExportSize) -> Self {
        Self { format, size }
    }

    /// `moodart-board-<size>.<ext>`, or `moodart-board.html` for HTML
    pub fn file_name(&self) -> String {
        if self.format.is_sized() {
            format!(
                "{}-{}.{}",
                EXPORT_FILE_STEM,
                self.size.name(),
                self.format.extension()
            )
        } else {
            format!("{}.{}", EXPORT_FILE_STEM, self.format.extension())
        }
    }
}

/// Everything an exporter needs, decoupled from the live board
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    /// Items in paint order (back to front)
    pub items: Vec<BoardItem>,
    /// Logical board surface size in board units
    pub board_size: (f32, f32),
}

impl BoardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A finished export, ready to download or write
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write into `dir`, creating it if needed. Returns the file path.
    pub fn write_to(&self, dir: &Path) -> ExportResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), bytes = self.bytes.len(), "Export written");
        Ok(path)
    }
}

/// Turns a board snapshot into an artifact.
pub trait Exporter {
    fn export(&mut self, snapshot: &BoardSnapshot, request: &ExportRequest) -> ExportResult<ExportArtifact>;
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            items: self.store.ordered_for_render().into_iter().cloned().collect(),
            board_size: BOARD_SIZE,
        }
    }

    /// Export the board. An empty board is refused before the exporter runs.
    pub fn export(
        &self,
        exporter: &mut dyn Exporter,
        request: ExportRequest,
    ) -> ExportResult<ExportArtifact> {
        if self.store.is_empty() {
            return Err(ExportError::EmptyBoard);
        }

        let snapshot = self.snapshot();
        exporter.export(&snapshot, &request).inspect_err(|err| {
            tracing::error!(format = request.format.label(), error = %err, "Export failed");
        })
    }
}
