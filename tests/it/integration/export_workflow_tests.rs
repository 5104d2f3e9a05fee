//! Export workflow: host exporters, empty boards, writing artifacts.

use crate::helpers::TestBoardBuilder;
use moodart::error::{ExportError, ExportResult};
use moodart::export::{
    BoardSnapshot, ExportArtifact, ExportFormat, ExportRequest, ExportSize, Exporter, HtmlExporter,
};
use moodart::Board;
use tempfile::TempDir;

/// Stand-in for a host rasterizer: records what it was asked to draw.
#[derive(Default)]
struct RecordingRasterizer {
    seen: Vec<(usize, f32)>,
    fail: bool,
}

impl Exporter for RecordingRasterizer {
    fn export(&mut self, snapshot: &BoardSnapshot, request: &ExportRequest) -> ExportResult<ExportArtifact> {
        if self.fail {
            return Err(ExportError::Render("canvas tainted".into()));
        }
        self.seen.push((snapshot.items.len(), request.size.pixel_ratio()));
        Ok(ExportArtifact {
            file_name: request.file_name(),
            mime_type: request.format.mime_type(),
            bytes: vec![0x89, b'P', b'N', b'G'],
        })
    }
}

#[test]
fn test_raster_export_gets_snapshot_and_ratio() {
    let (board, _) = TestBoardBuilder::new().with_n_notes(3).build();
    let mut rasterizer = RecordingRasterizer::default();

    let artifact = board
        .export(&mut rasterizer, ExportRequest::new(ExportFormat::Png, ExportSize::Medium))
        .unwrap();
    assert_eq!(artifact.file_name, "moodart-board-medium.png");
    assert_eq!(artifact.mime_type, "image/png");
    assert_eq!(rasterizer.seen, vec![(3, 1.5)]);
}

#[test]
fn test_empty_board_never_reaches_exporter() {
    let board = Board::new();
    let mut rasterizer = RecordingRasterizer::default();
    let err = board
        .export(&mut rasterizer, ExportRequest::new(ExportFormat::Pdf, ExportSize::Original))
        .unwrap_err();
    assert_eq!(err.to_string(), "Board is empty - add some items first!");
    assert!(rasterizer.seen.is_empty());
}

#[test]
fn test_exporter_failure_is_returned() {
    let (board, _) = TestBoardBuilder::new().with_n_notes(1).build();
    let mut rasterizer = RecordingRasterizer {
        fail: true,
        ..Default::default()
    };
    let result = board.export(&mut rasterizer, ExportRequest::new(ExportFormat::Jpeg, ExportSize::Small));
    assert!(matches!(result, Err(ExportError::Render(_))));
}

#[test]
fn test_html_artifact_written_to_disk() {
    let (board, _) = TestBoardBuilder::new().with_note("on disk", (0.0, 0.0)).build();
    let artifact = board
        .export(
            &mut HtmlExporter::default(),
            ExportRequest::new(ExportFormat::Html, ExportSize::Original),
        )
        .unwrap();

    let dir = TempDir::new().unwrap();
    let path = artifact.write_to(&dir.path().join("exports")).unwrap();
    assert!(path.ends_with("moodart-board.html"));
    let written = std::fs::read_to_string(path).unwrap();
    assert!(written.contains("on disk"));
}
