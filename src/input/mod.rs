//! Pointer input handling for the board.
//!
//! This module implements all pointer interaction logic: item dragging,
//! resizing and viewport panning.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`InputState`) to track
//! the current interaction mode. Drag, resize and pan are variants of one
//! enum, so two gestures can never be active at once.
//!
//! Every gesture stores its origin (pointer and item geometry or pan) and
//! recomputes the result from that origin on each move, so rounding never
//! accumulates over a long gesture.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `events` - Pointer events and targets as delivered by the host
//! - `drag` / `resize` / `pan` - Gesture math
//! - `mouse_down` - Pointer down handling (selection, gesture start, placement)
//! - `mouse_move` - Pointer move handling (apply the active gesture)
//! - `mouse_up` - Pointer up handling (end the gesture)

pub mod drag;
pub mod events;
pub mod pan;
pub mod resize;
mod mouse_down;
mod mouse_move;
mod mouse_up;
mod state;

pub use drag::DragGesture;
pub use events::{PointerButton, PointerDown, PointerTarget};
pub use pan::PanGesture;
pub use resize::{ResizeCorner, ResizeGesture};
pub use state::{GestureKind, InputState};
