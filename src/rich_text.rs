//! Rich-text formatting for document items.
//!
//! The editing surface belongs to the host. The engine hands it the focused
//! document and a command, and stores whatever content comes back.

use crate::board::Board;
use crate::types::{ItemContent, ItemId, ItemPatch};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
}

impl FormatCommand {
    /// Command name as understood by editing surfaces
    pub fn name(&self) -> &'static str {
        match self {
            FormatCommand::Bold => "bold",
            FormatCommand::Italic => "italic",
            FormatCommand::Underline => "underline",
        }
    }
}

/// Host-side rich-text editor.
pub trait RichTextEditor {
    /// Apply `command` to the focused document's content and return the
    /// updated content, or None if the editor made no change.
    fn apply(&mut self, focus: ItemId, command: FormatCommand, content: &str) -> Option<String>;
}

impl Board {
    /// Format a document item's content. The document takes editing focus.
    /// Returns false for unknown ids, non-document items, or no change.
    pub fn apply_format(
        &mut self,
        id: ItemId,
        command: FormatCommand,
        editor: &mut dyn RichTextEditor,
    ) -> bool {
        let content = match self.store.get(id).map(|item| &item.content) {
            Some(ItemContent::Document { text, .. }) => text.clone(),
            Some(_) => {
                tracing::debug!(item_id = %id, "Formatting only applies to documents");
                return false;
            }
            None => return false,
        };

        self.begin_editing(id);
        match editor.apply(id, command, &content) {
            Some(updated) => self.store.patch(id, &ItemPatch::text(updated)),
            None => false,
        }
    }
}
