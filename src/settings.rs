//! User preferences, stored as JSON in the platform config directory.
//!
//! Every field has a default, so partial or older files still load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::export::ExportSize;
use crate::logging;
use crate::palette::{self, Color, Palette};
use crate::types::SwatchOrientation;

const APP_DIR: &str = "moodart";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the dot grid behind items
    pub show_grid: bool,
    /// Preset offered first in the export dialog
    pub export_size: ExportSize,
    /// Saved palette stops
    pub palette: Vec<Color>,
    pub palette_orientation: SwatchOrientation,
    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_grid: true,
            export_size: ExportSize::default(),
            palette: palette::default_stops(),
            palette_orientation: SwatchOrientation::default(),
            log_filter: "moodart=info".to_string(),
        }
    }
}

impl Settings {
    /// `<config dir>/moodart/settings.json`, None if the platform has no
    /// config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load from the default path, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("No config directory, using default settings");
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating settings directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serializing settings")?;
        fs::write(path, json).with_context(|| format!("writing settings to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Settings saved");
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::default_path().context("no config directory on this platform")?;
        self.save_to(&path)
    }

    /// The palette these settings describe
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette.clone(), self.palette_orientation)
    }

    /// Install the tracing subscriber with [`Settings::log_filter`] as the
    /// default filter.
    pub fn init_logging(&self) -> anyhow::Result<()> {
        logging::init(&self.log_filter)
    }

    /// Remember a palette's stops and orientation
    pub fn store_palette(&mut self, palette: &Palette) {
        self.palette = palette.stops().to_vec();
        self.palette_orientation = palette.orientation();
    }
}
