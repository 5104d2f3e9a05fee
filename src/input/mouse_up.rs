//! Pointer up handling - finalize the active gesture.

use super::GestureKind;
use crate::board::Board;

impl Board {
    /// Handle pointer release anywhere. Ends whatever gesture is active and
    /// always releases text-selection suppression.
    pub fn handle_pointer_up(&mut self) -> Option<GestureKind> {
        let ended = self.input_state.reset();
        self.text_selection_suppressed = false;

        if let Some(kind) = ended {
            tracing::debug!(?kind, "Gesture ended");
        }
        ended
    }
}
