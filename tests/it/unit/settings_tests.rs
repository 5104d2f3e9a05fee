//! Settings persistence tests.

use moodart::error::SettingsError;
use moodart::export::ExportSize;
use moodart::palette::{Color, Palette};
use moodart::settings::Settings;
use moodart::types::SwatchOrientation;
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut settings = Settings {
        show_grid: false,
        export_size: ExportSize::Medium,
        ..Settings::default()
    };
    let mut palette = Palette::default();
    palette.set_current(Color::parse("#abcdef").unwrap());
    palette.add_stop();
    palette.set_orientation(SwatchOrientation::Horizontal);
    settings.store_palette(&palette);

    settings.save_to(&path).unwrap();
    let loaded = Settings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
    assert_eq!(loaded.palette().stops().len(), 4);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Settings::load_from(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(SettingsError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(Settings::load_from(&path), Err(SettingsError::Json(_))));
}

#[test]
fn test_export_size_serializes_lowercase() {
    let json = serde_json::to_string(&Settings::default()).unwrap();
    assert!(json.contains("\"export_size\":\"original\""));
    assert!(json.contains("\"palette_orientation\":\"vertical\""));
}

#[test]
fn test_board_honors_grid_setting() {
    let settings = Settings {
        show_grid: false,
        ..Settings::default()
    };
    let mut board = moodart::Board::with_settings(&settings);
    assert_eq!(board.grid_spacing(), None);
    board.toggle_grid();
    assert_eq!(board.grid_spacing(), Some(24.0));
}

#[test]
fn test_init_logging_installs_once() {
    let settings = Settings {
        log_filter: "moodart=debug".to_string(),
        ..Settings::default()
    };
    settings.init_logging().unwrap();
    // A global subscriber is already set now
    assert!(settings.init_logging().is_err());
}
