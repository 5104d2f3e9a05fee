//! Colors and the swatch palette.
//!
//! The palette is what the color UI edits; its stops are copied into a
//! swatch item when one is added to the board.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{COLOR_RED, DEFAULT_PALETTE};
use crate::error::ColorError;
use crate::types::SwatchOrientation;

/// A committed hex color value such as `#D84040`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a full `#rgb` or `#rrggbb` color.
    pub fn parse(value: &str) -> Result<Self, ColorError> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| ColorError::Invalid(value.to_string()))?;
        let valid_len = hex.len() == 3 || hex.len() == 6;
        if !valid_len || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::Invalid(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Whether `value` is acceptable as in-progress text entry: `#` followed
    /// by up to six hex digits.
    pub fn is_partial_hex(value: &str) -> bool {
        match value.strip_prefix('#') {
            Some(hex) => hex.len() <= 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Upper-cased form for display
    pub fn display_hex(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// Built-in colors are known-valid hex literals.
pub(crate) fn builtin(hex: &'static str) -> Color {
    Color(hex.to_string())
}

/// The default palette stops
pub fn default_stops() -> Vec<Color> {
    DEFAULT_PALETTE.iter().map(|hex| builtin(hex)).collect()
}

/// Direction for moving a palette stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopMove {
    Up,
    Down,
}

/// Ordered color stops plus the current picker color.
///
/// Always holds at least one stop.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    stops: Vec<Color>,
    current: Color,
    orientation: SwatchOrientation,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stops: default_stops(),
            current: builtin(COLOR_RED),
            orientation: SwatchOrientation::default(),
        }
    }
}

impl Palette {
    /// Create a palette from stops; an empty list falls back to the defaults.
    pub fn new(stops: Vec<Color>, orientation: SwatchOrientation) -> Self {
        let stops = if stops.is_empty() { default_stops() } else { stops };
        Self {
            stops,
            current: builtin(COLOR_RED),
            orientation,
        }
    }

    pub fn stops(&self) -> &[Color] {
        &self.stops
    }

    pub fn current(&self) -> &Color {
        &self.current
    }

    pub fn orientation(&self) -> SwatchOrientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: SwatchOrientation) {
        self.orientation = orientation;
    }

    pub fn set_current(&mut self, color: Color) {
        self.current = color;
    }

    /// Replace the color of one stop. Out-of-range indices are ignored.
    pub fn set_stop(&mut self, index: usize, color: Color) -> bool {
        match self.stops.get_mut(index) {
            Some(stop) => {
                *stop = color;
                true
            }
            None => false,
        }
    }

    /// Append the current color as a new stop.
    pub fn add_stop(&mut self) {
        self.stops.push(self.current.clone());
    }

    /// Remove a stop; the last remaining stop is never removed.
    pub fn remove_stop(&mut self, index: usize) -> bool {
        if self.stops.len() <= 1 || index >= self.stops.len() {
            return false;
        }
        self.stops.remove(index);
        true
    }

    /// Swap a stop with its neighbour.
    pub fn move_stop(&mut self, index: usize, direction: StopMove) -> bool {
        let target = match direction {
            StopMove::Up if index > 0 => index - 1,
            StopMove::Down if index + 1 < self.stops.len() => index + 1,
            _ => return false,
        };
        self.stops.swap(index, target);
        true
    }
}
