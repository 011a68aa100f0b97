//! Stroke capture and rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types for the freehand surface:
//! - [`Color`]: RGBA color representation with the toolbar palette
//! - [`Point`] and [`Stroke`]: one recorded pointer gesture
//! - [`History`]: committed/redoable stacks for linear undo/redo
//! - [`DrawingSurface`]: the gesture recorder that owns history and raster
//! - Rendering functions for Cairo-based output

pub mod color;
pub mod history;
pub mod path;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use history::History;
pub use path::{PathSegment, smooth_path};
pub use render::{Composite, Ink, render_stroke, render_strokes};
pub use stroke::{Point, Stroke};
pub use surface::{DrawingSurface, Pixel, SurfaceError};
