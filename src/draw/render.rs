//! Cairo-based rendering of strokes.

use super::color::{BLACK, Color};
use super::path::{PathSegment, quad_to_cubic, smooth_path};
use super::stroke::{Point, Stroke};
use crate::input::Tool;

/// Opacity applied to pencil strokes.
pub const PENCIL_OPACITY: f64 = 0.7;
/// Opacity applied to highlighter strokes.
pub const HIGHLIGHTER_OPACITY: f64 = 0.35;
/// Highlighter width as a multiple of the base size.
pub const HIGHLIGHTER_WIDTH_SCALE: f64 = 6.0;
/// Eraser width as a multiple of the base size.
pub const ERASER_WIDTH_SCALE: f64 = 8.0;

/// How a stroke combines with pixels already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composite {
    /// Paint over existing content
    Over,
    /// Remove existing content under the stroke
    Erase,
}

impl Composite {
    fn operator(self) -> cairo::Operator {
        match self {
            Composite::Over => cairo::Operator::Over,
            Composite::Erase => cairo::Operator::DestOut,
        }
    }
}

/// Resolved paint parameters for one stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ink {
    pub composite: Composite,
    /// Source color with the tool's opacity already applied
    pub color: Color,
    pub width: f64,
}

impl Ink {
    /// Derives the paint parameters from a stroke's tool, color and size.
    ///
    /// Shape tools (line, circle, rect) render exactly like the pen.
    pub fn for_stroke(stroke: &Stroke) -> Self {
        let (color, size) = (stroke.color(), stroke.size());
        match stroke.tool() {
            Tool::Pencil => Self {
                composite: Composite::Over,
                color: color.with_opacity(PENCIL_OPACITY),
                width: size,
            },
            Tool::Highlighter => Self {
                composite: Composite::Over,
                color: color.with_opacity(HIGHLIGHTER_OPACITY),
                width: size * HIGHLIGHTER_WIDTH_SCALE,
            },
            Tool::Eraser => Self {
                composite: Composite::Erase,
                color: BLACK,
                width: size * ERASER_WIDTH_SCALE,
            },
            _ => Self {
                composite: Composite::Over,
                color,
                width: size,
            },
        }
    }
}

/// Clears every pixel of the target to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    if let Err(err) = ctx.paint() {
        log::warn!("Failed to clear drawing surface: {err}");
    }
    ctx.restore().ok();
}

/// Fills the whole target with a solid color (used for paper backgrounds).
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint(); // Ignore errors - export falls back to a transparent background
    ctx.restore().ok();
}

/// Renders all strokes in order (first stroke = bottom layer).
pub fn render_strokes<'a>(ctx: &cairo::Context, strokes: impl IntoIterator<Item = &'a Stroke>) {
    for stroke in strokes {
        render_stroke(ctx, stroke);
    }
}

/// Renders a single stroke along its smoothed path.
///
/// Strokes with fewer than two points draw nothing. The composition operator
/// and opacity are reset afterwards so an eraser never affects later strokes.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    let segments = smooth_path(stroke.points());
    if segments.is_empty() {
        return;
    }

    let ink = Ink::for_stroke(stroke);

    // Save context state to prevent settings from leaking to other strokes
    ctx.save().ok();

    ctx.set_operator(ink.composite.operator());
    ctx.set_source_rgba(ink.color.r, ink.color.g, ink.color.b, ink.color.a);
    ctx.set_line_width(ink.width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    trace_path(ctx, &segments);
    if let Err(err) = ctx.stroke() {
        log::warn!("Failed to stroke {} path: {err}", stroke.tool());
    }

    ctx.restore().ok();
}

/// Appends the segments to the context's current path.
fn trace_path(ctx: &cairo::Context, segments: &[PathSegment]) {
    let mut current = Point::new(0.0, 0.0);
    for segment in segments {
        match *segment {
            PathSegment::MoveTo(to) => {
                ctx.move_to(to.x, to.y);
                current = to;
            }
            PathSegment::QuadTo { ctrl, to } => {
                let (c1, c2) = quad_to_cubic(current, ctrl, to);
                ctx.curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y);
                current = to;
            }
            PathSegment::LineTo(to) => {
                ctx.line_to(to.x, to.y);
                current = to;
            }
        }
    }
}
