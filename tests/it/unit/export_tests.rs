//! HTML export tests using the insta crate.
//!
//! Item markup is checked with inline snapshots. To update after an
//! intentional change:
//! ```bash
//! cargo insta test --accept
//! ```

use crate::helpers::TestBoardBuilder;
use moodart::export::{ExportFormat, ExportRequest, ExportSize, HtmlExporter};
use moodart::palette::Color;
use moodart::types::SwatchOrientation;
use moodart::{Board, ItemContent, ItemKind, ItemPatch, MediaHandle};

fn markup(board: &Board, id: moodart::ItemId) -> String {
    let item = board.items().get(id).unwrap();
    HtmlExporter::default().render_item(item).unwrap()
}

#[test]
fn test_note_markup() {
    let (board, ids) = TestBoardBuilder::new().with_note("Tom & Jerry", (10.0, 20.0)).build();
    insta::assert_snapshot!(markup(&board, ids[0]), @r#"<div class="item note" style="left:10px;top:20px;width:240px;height:140px">Tom &amp; Jerry</div>"#);
}

#[test]
fn test_document_keeps_rich_text() {
    let mut board = Board::new();
    let id = board.add_document();
    board.patch_item(id, &ItemPatch::text("<b>bold</b>").with_title("Plan <1>"));
    insta::assert_snapshot!(markup(&board, id), @r#"<div class="item document" style="left:100px;top:100px;width:200px;height:140px"><div class="doc-title">Plan &lt;1&gt;</div><div><b>bold</b></div></div>"#);
}

#[test]
fn test_link_markup() {
    let mut board = Board::new();
    let id = board.add_link();
    board.patch_item(id, &ItemPatch::default().with_url("https://example.com/?a=1&b=2"));
    insta::assert_snapshot!(markup(&board, id), @r#"<div class="item link" style="left:100px;top:100px;width:300px;height:100px"><div class="link-title">Link</div><a href="https://example.com/?a=1&amp;b=2" target="_blank">https://example.com/?a=1&amp;b=2</a></div>"#);
}

#[test]
fn test_empty_link_points_nowhere() {
    let mut board = Board::new();
    let id = board.add_link();
    assert!(markup(&board, id).contains("href=\"#\""));
}

#[test]
fn test_swatch_emits_one_band_per_color() {
    let mut board = Board::new();
    let colors = [Color::parse("#111").unwrap(), Color::parse("#222").unwrap()];
    let id = board.add_swatch(&colors, SwatchOrientation::Horizontal);
    insta::assert_snapshot!(markup(&board, id), @r#"<div class="item swatch swatch-h" style="left:100px;top:100px;width:240px;height:110px"><div class="swatch-color" style="background:#111"></div><div class="swatch-color" style="background:#222"></div></div>"#);
}

#[test]
fn test_voice_note_markup() {
    let mut board = Board::new();
    let id = board.add_voice_note(MediaHandle::new("blob:voice"));
    insta::assert_snapshot!(markup(&board, id), @r#"<div class="item audio-container" style="left:100px;top:100px;width:300px;height:80px"><div class="audio-title">Voice Note</div><audio controls src="blob:voice"></audio></div>"#);
}

#[test]
fn test_page_skips_placeholders() {
    let mut board = Board::new();
    board.add_image();
    board.add_item(ItemContent::new_default(ItemKind::Video));
    let note = board.add_note();
    board.patch_item(note, &ItemPatch::text("only me"));

    let page = HtmlExporter::default().render(&board.snapshot());
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("<title>Moodart Board</title>"));
    assert!(page.contains("only me"));
    assert!(!page.contains("<img"));
    assert!(!page.contains("<video"));
}

#[test]
fn test_export_artifact() {
    let (board, _) = TestBoardBuilder::new().with_n_notes(2).build();
    let artifact = board
        .export(
            &mut HtmlExporter::default(),
            ExportRequest::new(ExportFormat::Html, ExportSize::Large),
        )
        .unwrap();
    assert_eq!(artifact.file_name, "moodart-board.html");
    assert_eq!(artifact.mime_type, "text/html");

    let page = String::from_utf8(artifact.bytes).unwrap();
    let first = page.find("Item 0").unwrap();
    let second = page.find("Item 1").unwrap();
    // Later (higher z) items are painted after earlier ones
    assert!(first < second);
}
