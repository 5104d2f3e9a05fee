//! Core types for the board canvas.
//!
//! This module defines the item model every interaction mutates: the
//! closed set of item kinds, their per-kind fields, and the partial update
//! (`ItemPatch`) that is the only way an item changes after creation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::constants::{
    self, DEFAULT_COMMENT_TEXT, DEFAULT_DOCUMENT_TEXT, DEFAULT_DOCUMENT_TITLE, DEFAULT_LINK_TITLE,
    DEFAULT_NOTE_TEXT, MIN_ITEM_SIZE, SWATCH_SIZE_HORIZONTAL, SWATCH_SIZE_VERTICAL,
};
use crate::palette::{self, Color};

/// Process-wide id counter. Ids are never reused.
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque unique identifier of a board item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Allocate the next id from the process-wide counter.
    pub(crate) fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a playable media resource (typically a blob or file URL).
///
/// An empty handle marks a placeholder that is not renderable yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaHandle(String);

impl MediaHandle {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Direction the color bands of a swatch run in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwatchOrientation {
    Horizontal,
    #[default]
    Vertical,
}

impl SwatchOrientation {
    /// Default swatch size for this orientation
    pub fn default_size(self) -> (f32, f32) {
        match self {
            SwatchOrientation::Horizontal => SWATCH_SIZE_HORIZONTAL,
            SwatchOrientation::Vertical => SWATCH_SIZE_VERTICAL,
        }
    }
}

/// Discriminant of an item, without its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Image,
    Note,
    Document,
    Comment,
    Link,
    Swatch,
    Audio,
    Video,
}

impl ItemKind {
    pub fn all() -> &'static [ItemKind] {
        &[
            ItemKind::Image,
            ItemKind::Note,
            ItemKind::Document,
            ItemKind::Comment,
            ItemKind::Link,
            ItemKind::Swatch,
            ItemKind::Audio,
            ItemKind::Video,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Image => "image",
            ItemKind::Note => "note",
            ItemKind::Document => "document",
            ItemKind::Comment => "comment",
            ItemKind::Link => "link",
            ItemKind::Swatch => "swatch",
            ItemKind::Audio => "audio",
            ItemKind::Video => "video",
        }
    }

    /// Media kinds carry a resource handle that may legitimately be empty
    pub fn is_media(&self) -> bool {
        matches!(self, ItemKind::Image | ItemKind::Audio | ItemKind::Video)
    }
}

/// The content of a board item.
///
/// Closed set of variants; every consumer matches exhaustively.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemContent {
    /// A picked image; `src` stays empty until a file is chosen
    Image { src: MediaHandle },
    /// Plain text sticky note
    Note { text: String },
    /// Titled rich-text document (`text` holds HTML)
    Document { title: String, text: String },
    /// Plain text comment
    Comment { text: String },
    /// A titled web link
    Link { title: String, url: String },
    /// Color bands, at least one
    Swatch {
        colors: Vec<Color>,
        orientation: SwatchOrientation,
    },
    /// Audio clip or voice note
    Audio { src: MediaHandle, title: String },
    /// Video clip
    Video { src: MediaHandle, title: String },
}

impl ItemContent {
    /// Default content for a kind. Text fields start non-empty, links start
    /// without a target. Media kinds start as placeholders with an empty
    /// `src`; swatches start with the default palette.
    pub fn new_default(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Image => ItemContent::Image {
                src: MediaHandle::default(),
            },
            ItemKind::Note => ItemContent::Note {
                text: DEFAULT_NOTE_TEXT.to_string(),
            },
            ItemKind::Document => ItemContent::Document {
                title: DEFAULT_DOCUMENT_TITLE.to_string(),
                text: DEFAULT_DOCUMENT_TEXT.to_string(),
            },
            ItemKind::Comment => ItemContent::Comment {
                text: DEFAULT_COMMENT_TEXT.to_string(),
            },
            ItemKind::Link => ItemContent::Link {
                title: DEFAULT_LINK_TITLE.to_string(),
                url: String::new(),
            },
            ItemKind::Swatch => ItemContent::Swatch {
                colors: palette::default_stops(),
                orientation: SwatchOrientation::default(),
            },
            ItemKind::Audio => ItemContent::Audio {
                src: MediaHandle::default(),
                title: constants::DEFAULT_MEDIA_TITLE.to_string(),
            },
            ItemKind::Video => ItemContent::Video {
                src: MediaHandle::default(),
                title: constants::DEFAULT_MEDIA_TITLE.to_string(),
            },
        }
    }

    /// Swatch content; an empty color list falls back to the default palette.
    pub fn swatch(colors: Vec<Color>, orientation: SwatchOrientation) -> Self {
        ItemContent::Swatch {
            colors,
            orientation,
        }
        .normalized()
    }

    /// Content as it may be stored: a swatch always has a color.
    pub(crate) fn normalized(self) -> Self {
        match self {
            ItemContent::Swatch {
                colors,
                orientation,
            } if colors.is_empty() => ItemContent::Swatch {
                colors: palette::default_stops(),
                orientation,
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Image { .. } => ItemKind::Image,
            ItemContent::Note { .. } => ItemKind::Note,
            ItemContent::Document { .. } => ItemKind::Document,
            ItemContent::Comment { .. } => ItemKind::Comment,
            ItemContent::Link { .. } => ItemKind::Link,
            ItemContent::Swatch { .. } => ItemKind::Swatch,
            ItemContent::Audio { .. } => ItemKind::Audio,
            ItemContent::Video { .. } => ItemKind::Video,
        }
    }

    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ItemContent::Swatch { orientation, .. } => orientation.default_size(),
            other => constants::default_size(other.kind()),
        }
    }

    /// The media handle, for media kinds
    pub fn src(&self) -> Option<&MediaHandle> {
        match self {
            ItemContent::Image { src }
            | ItemContent::Audio { src, .. }
            | ItemContent::Video { src, .. } => Some(src),
            _ => None,
        }
    }

    /// A media item whose resource has not been attached yet.
    ///
    /// Placeholders are not errors; they are simply not renderable.
    pub fn is_placeholder(&self) -> bool {
        self.src().is_some_and(MediaHandle::is_empty)
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            ItemContent::Document { title, .. }
            | ItemContent::Link { title, .. }
            | ItemContent::Audio { title, .. }
            | ItemContent::Video { title, .. } => Some(title),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            ItemContent::Note { text }
            | ItemContent::Document { text, .. }
            | ItemContent::Comment { text } => Some(text),
            _ => None,
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            ItemContent::Image { .. } => "Image".to_string(),
            ItemContent::Note { text } | ItemContent::Comment { text } if !text.is_empty() => {
                text.lines().next().unwrap_or_default().to_string()
            }
            ItemContent::Note { .. } => "Note".to_string(),
            ItemContent::Comment { .. } => "Comment".to_string(),
            ItemContent::Document { title, .. } => title.clone(),
            ItemContent::Link { title, url } => {
                if title.is_empty() {
                    url.clone()
                } else {
                    title.clone()
                }
            }
            ItemContent::Swatch { colors, .. } => format!("Palette ({} colors)", colors.len()),
            ItemContent::Audio { title, .. } | ItemContent::Video { title, .. } => title.clone(),
        }
    }

    pub fn type_label(&self) -> &'static str {
        match self {
            ItemContent::Image { .. } => "IMAGE",
            ItemContent::Note { .. } => "NOTE",
            ItemContent::Document { .. } => "DOC",
            ItemContent::Comment { .. } => "COMMENT",
            ItemContent::Link { .. } => "LINK",
            ItemContent::Swatch { .. } => "PALETTE",
            ItemContent::Audio { .. } => "AUDIO",
            ItemContent::Video { .. } => "VIDEO",
        }
    }
}

/// An item placed on the infinite canvas.
///
/// Deserialized items go through the same size floor and color rule as
/// created ones.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredItem")]
pub struct BoardItem {
    /// Unique identifier, immutable after creation
    pub id: ItemId,
    /// Top-left corner in board coordinates (x, y)
    pub position: (f32, f32),
    /// Size in board units (width, height)
    pub size: (f32, f32),
    /// Stacking order, front = highest
    pub z_index: u32,
    /// The content this item displays
    #[serde(flatten)]
    pub content: ItemContent,
}

impl BoardItem {
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// Bottom-right corner in board coordinates
    pub fn max_corner(&self) -> (f32, f32) {
        (self.position.0 + self.size.0, self.position.1 + self.size.1)
    }
}

/// Wire shape of a [`BoardItem`] before validation
#[derive(Deserialize)]
struct StoredItem {
    id: ItemId,
    position: (f32, f32),
    size: (f32, f32),
    z_index: u32,
    #[serde(flatten)]
    content: ItemContent,
}

impl From<StoredItem> for BoardItem {
    fn from(stored: StoredItem) -> Self {
        let content = stored.content.normalized();
        let mut item = BoardItem {
            id: stored.id,
            position: stored.position,
            size: content.default_size(),
            z_index: stored.z_index,
            content,
        };
        ItemPatch::size(stored.size.0, stored.size.1).apply_to(&mut item);
        item
    }
}

/// Partial update for one item.
///
/// There is no way to express a change of `id` or kind. Fields that do not
/// belong to the target item's variant are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemPatch {
    pub position: Option<(f32, f32)>,
    pub size: Option<(f32, f32)>,
    pub text: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub src: Option<MediaHandle>,
    pub colors: Option<Vec<Color>>,
    pub orientation: Option<SwatchOrientation>,
}

impl ItemPatch {
    pub fn position(x: f32, y: f32) -> Self {
        Self {
            position: Some((x, y)),
            ..Default::default()
        }
    }

    pub fn size(w: f32, h: f32) -> Self {
        Self {
            size: Some((w, h)),
            ..Default::default()
        }
    }

    pub fn geometry(position: (f32, f32), size: (f32, f32)) -> Self {
        Self {
            position: Some(position),
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn src(src: MediaHandle) -> Self {
        Self {
            src: Some(src),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_orientation(mut self, orientation: SwatchOrientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Merge this patch into `item`. Returns true if any field was written.
    ///
    /// Sizes are clamped to the minimum item size, non-finite numbers and an
    /// empty color list are dropped.
    pub(crate) fn apply_to(&self, item: &mut BoardItem) -> bool {
        let mut changed = false;

        if let Some((x, y)) = self.position {
            if x.is_finite() && y.is_finite() {
                item.position = (x, y);
                changed = true;
            }
        }

        if let Some((w, h)) = self.size {
            if w.is_finite() && h.is_finite() {
                item.size = (w.max(MIN_ITEM_SIZE), h.max(MIN_ITEM_SIZE));
                changed = true;
            }
        }

        match &mut item.content {
            ItemContent::Note { text } | ItemContent::Comment { text } => {
                changed |= assign(text, &self.text);
            }
            ItemContent::Document { title, text } => {
                changed |= assign(title, &self.title);
                changed |= assign(text, &self.text);
            }
            ItemContent::Link { title, url } => {
                changed |= assign(title, &self.title);
                changed |= assign(url, &self.url);
            }
            ItemContent::Image { src } => {
                changed |= assign(src, &self.src);
            }
            ItemContent::Audio { src, title } | ItemContent::Video { src, title } => {
                changed |= assign(src, &self.src);
                changed |= assign(title, &self.title);
            }
            ItemContent::Swatch {
                colors,
                orientation,
            } => {
                if let Some(new_colors) = self.colors.as_ref().filter(|c| !c.is_empty()) {
                    *colors = new_colors.clone();
                    changed = true;
                }
                if let Some(new_orientation) = self.orientation {
                    *orientation = new_orientation;
                    changed = true;
                }
            }
        }

        changed
    }
}

fn assign<T: Clone>(field: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) => {
            *field = v.clone();
            true
        }
        None => false,
    }
}
