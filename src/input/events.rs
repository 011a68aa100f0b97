//! Event types delivered to the drawing surface by its host.

use crate::draw::Point;

/// Pointer activity over the surface, in surface-local pixels.
///
/// Mouse and touch input map onto the same four events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed or finger down
    Down(Point),
    /// Pointer moved (only meaningful while a gesture is active)
    Move(Point),
    /// Button released or finger lifted
    Up,
    /// Pointer left the surface; ends the gesture like `Up`
    Leave,
}

/// History commands fired by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceCommand {
    Undo,
    Redo,
    Clear,
}

/// Everything the surface's update entry point accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    Pointer(PointerEvent),
    Command(SurfaceCommand),
    /// Hosting container changed size
    Resize { width: u32, height: u32 },
}

impl From<PointerEvent> for SurfaceEvent {
    fn from(event: PointerEvent) -> Self {
        SurfaceEvent::Pointer(event)
    }
}

impl From<SurfaceCommand> for SurfaceEvent {
    fn from(command: SurfaceCommand) -> Self {
        SurfaceEvent::Command(command)
    }
}
