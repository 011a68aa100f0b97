//! Input handling: tool selection and the events hosts feed to the surface.
//!
//! This module holds the toolbar state (current tool, color, size) and the
//! pointer/command event types translated by a host into surface updates.

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{PointerEvent, SurfaceCommand, SurfaceEvent};
pub use state::ToolState;
pub use tool::{CursorHint, SizePreset, Tool};
