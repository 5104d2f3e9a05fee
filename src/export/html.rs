//! Static HTML export - a standalone page with every item absolutely
//! positioned at its board coordinates.

use super::{BoardSnapshot, ExportArtifact, ExportFormat, ExportRequest, Exporter};
use crate::constants::{COLOR_DARK_RED, COLOR_RED, EXPORT_TITLE};
use crate::error::{ExportError, ExportResult};
use crate::types::{BoardItem, ItemContent, SwatchOrientation};

const STYLE: &str = "\
    body { margin: 0; padding: 40px; background: white; font-family: sans-serif; }
    h1 { color: {red}; margin-bottom: 30px; }
    .board { position: relative; width: 100%; min-height: 800px; background: #fafafa; border: 1px solid #e0e0e0; border-radius: 8px; padding: 20px; }
    .item { position: absolute; border-radius: 16px; box-shadow: 0 4px 12px rgba(0,0,0,0.1); overflow: hidden; }
    .item img { width: 100%; height: 100%; object-fit: cover; }
    .item video { width: 100%; height: 100%; object-fit: contain; background: #000; }
    .item audio { width: calc(100% - 20px); margin: 10px; }
    .note { background: rgba(255,255,255,0.95); padding: 20px; font-size: 14px; line-height: 1.6; }
    .document { background: rgba(255,255,255,0.98); padding: 20px; }
    .doc-title { font-weight: bold; margin-bottom: 10px; color: {dark_red}; }
    .comment { background: rgba(216, 64, 64, 0.12); padding: 20px; border: 2px solid rgba(216, 64, 64, 0.3); }
    .comment-title { font-weight: bold; margin-bottom: 10px; color: {red}; }
    .link { background: rgba(224, 242, 254, 0.95); padding: 20px; border: 2px solid rgba(147, 197, 253, 0.5); }
    .link-title { font-weight: bold; margin-bottom: 10px; }
    .link a { color: #2563eb; text-decoration: none; }
    .swatch { display: flex; }
    .swatch-h { flex-direction: row; }
    .swatch-v { flex-direction: column; }
    .swatch-color { flex: 1; }
    .audio-container { background: rgba(255,255,255,0.98); padding: 16px; }
    .audio-title { font-weight: 600; font-size: 12px; margin-bottom: 8px; color: {dark_red}; }
";

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Built-in exporter producing a self-contained HTML page.
#[derive(Clone, Debug)]
pub struct HtmlExporter {
    title: String,
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new(EXPORT_TITLE)
    }
}

impl HtmlExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render the full page
    pub fn render(&self, snapshot: &BoardSnapshot) -> String {
        let title = escape_html(&self.title);
        let style = STYLE
            .replace("{red}", COLOR_RED)
            .replace("{dark_red}", COLOR_DARK_RED);

        let body: Vec<String> = snapshot
            .items
            .iter()
            .filter_map(|item| self.render_item(item))
            .map(|markup| format!("    {markup}"))
            .collect();

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  \
             <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
             <title>{title}</title>\n  <style>\n{style}  </style>\n</head>\n<body>\n  \
             <h1>{title}</h1>\n  <div class=\"board\">\n{}\n  </div>\n</body>\n</html>\n",
            body.join("\n")
        )
    }

    /// Markup for one item, None for media placeholders that have no
    /// resource yet.
    pub fn render_item(&self, item: &BoardItem) -> Option<String> {
        if item.content.is_placeholder() {
            return None;
        }

        let (class, inner) = match &item.content {
            ItemContent::Image { src } => (
                "item",
                format!("<img src=\"{}\" alt=\"\" />", escape_html(src.as_str())),
            ),
            ItemContent::Video { src, .. } => (
                "item",
                format!("<video controls src=\"{}\"></video>", escape_html(src.as_str())),
            ),
            ItemContent::Audio { src, title } => (
                "item audio-container",
                format!(
                    "<div class=\"audio-title\">{}</div><audio controls src=\"{}\"></audio>",
                    escape_html(title),
                    escape_html(src.as_str())
                ),
            ),
            ItemContent::Note { text } => ("item note", escape_html(text)),
            // Document bodies are rich text and already markup
            ItemContent::Document { title, text } => (
                "item document",
                format!("<div class=\"doc-title\">{}</div><div>{text}</div>", escape_html(title)),
            ),
            ItemContent::Comment { text } => (
                "item comment",
                format!(
                    "<div class=\"comment-title\">Comment</div><div>{}</div>",
                    escape_html(text)
                ),
            ),
            ItemContent::Link { title, url } => {
                let href = if url.is_empty() { "#" } else { url.as_str() };
                (
                    "item link",
                    format!(
                        "<div class=\"link-title\">{}</div><a href=\"{}\" target=\"_blank\">{}</a>",
                        escape_html(title),
                        escape_html(href),
                        escape_html(url)
                    ),
                )
            }
            ItemContent::Swatch {
                colors,
                orientation,
            } => {
                let class = match orientation {
                    SwatchOrientation::Horizontal => "item swatch swatch-h",
                    SwatchOrientation::Vertical => "item swatch swatch-v",
                };
                let bands: String = colors
                    .iter()
                    .map(|color| {
                        format!(
                            "<div class=\"swatch-color\" style=\"background:{}\"></div>",
                            escape_html(color.as_str())
                        )
                    })
                    .collect();
                (class, bands)
            }
        };

        let (x, y) = item.position;
        let (w, h) = item.size;
        Some(format!(
            "<div class=\"{class}\" style=\"left:{x}px;top:{y}px;width:{w}px;height:{h}px\">{inner}</div>"
        ))
    }
}

impl Exporter for HtmlExporter {
    fn export(&mut self, snapshot: &BoardSnapshot, request: &ExportRequest) -> ExportResult<ExportArtifact> {
        if request.format != ExportFormat::Html {
            return Err(ExportError::UnsupportedFormat(request.format.label()));
        }

        let page = self.render(snapshot);
        Ok(ExportArtifact {
            file_name: request.file_name(),
            mime_type: ExportFormat::Html.mime_type(),
            bytes: page.into_bytes(),
        })
    }
}
