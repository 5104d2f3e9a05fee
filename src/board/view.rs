//! View actions - zoom buttons, wheel, reset, viewport size, dot grid.

use super::Board;

impl Board {
    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out()
    }

    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        self.viewport.set_zoom(zoom)
    }

    /// One scroll wheel event (no inertia)
    pub fn handle_wheel(&mut self, delta_y: f32) -> bool {
        self.viewport.apply_wheel(delta_y)
    }

    /// Zoom 1.0, no pan
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        tracing::debug!("View reset");
    }

    /// Report the visible viewport size; the board is drawn from its center.
    pub fn set_viewport_size(&mut self, width: f32, height: f32) {
        if width.is_finite() && height.is_finite() {
            self.viewport_size = (width.max(0.0), height.max(0.0));
        }
    }

    pub fn viewport_size(&self) -> (f32, f32) {
        self.viewport_size
    }

    /// Screen point the board origin is drawn at (before pan)
    pub fn anchor(&self) -> (f32, f32) {
        (self.viewport_size.0 / 2.0, self.viewport_size.1 / 2.0)
    }

    pub fn screen_to_board(&self, screen: (f32, f32)) -> (f32, f32) {
        self.viewport.screen_to_board(screen, self.anchor())
    }

    pub fn board_to_screen(&self, board: (f32, f32)) -> (f32, f32) {
        self.viewport.board_to_screen(board, self.anchor())
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn toggle_grid(&mut self) -> bool {
        self.show_grid = !self.show_grid;
        self.show_grid
    }

    /// Dot grid spacing in screen pixels, None when the grid is hidden
    pub fn grid_spacing(&self) -> Option<f32> {
        self.show_grid.then(|| self.viewport.dot_spacing())
    }
}
