//! The freehand drawing surface: gesture capture, history and raster.

use super::color::Color;
use super::history::History;
use super::render;
use super::stroke::{Point, Stroke};
use crate::input::{PointerEvent, SurfaceCommand, SurfaceEvent, Tool, ToolState};
use log::{debug, warn};
use thiserror::Error;

/// Errors raised while allocating the backing raster.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Failed to allocate {width}x{height} raster: {source}")]
    Raster {
        width: u32,
        height: u32,
        #[source]
        source: cairo::Error,
    },
}

/// A premultiplied ARGB pixel read back from the raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Pointer-driven vector stroke recorder backed by a Cairo raster.
///
/// The surface exclusively owns its stroke history, the in-progress stroke
/// and the raster. Every operation runs to completion synchronously, and
/// every precondition violation (stray moves, undo on an empty history, ...)
/// is absorbed as a no-op.
pub struct DrawingSurface {
    raster: cairo::ImageSurface,
    width: u32,
    height: u32,
    history: History,
    /// Stroke being captured while a gesture is active
    active: Option<Stroke>,
}

impl std::fmt::Debug for DrawingSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("history", &self.history)
            .field("active", &self.active)
            .finish()
    }
}

impl DrawingSurface {
    /// Creates a blank, transparent surface. Dimensions are clamped to at least 1x1.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let (width, height) = (width.max(1), height.max(1));
        let raster = create_raster(width, height)?;
        debug!("Created {}x{} drawing surface", width, height);
        Ok(Self {
            raster,
            width,
            height,
            history: History::new(),
            active: None,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether a pointer gesture is currently being captured.
    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// The stroke being captured, if a gesture is active.
    pub fn in_progress(&self) -> Option<&Stroke> {
        self.active.as_ref()
    }

    /// Read-only access to the backing raster.
    pub fn raster(&self) -> &cairo::ImageSurface {
        &self.raster
    }

    /// Host entry point: applies one pointer, command or resize event.
    ///
    /// Pointer-down reads the tool, color and size from `tools`.
    pub fn update(&mut self, event: SurfaceEvent, tools: &ToolState) {
        match event {
            SurfaceEvent::Pointer(PointerEvent::Down(point)) => {
                self.begin_stroke(point, tools.tool(), tools.color(), tools.size());
            }
            SurfaceEvent::Pointer(PointerEvent::Move(point)) => self.extend_stroke(point),
            SurfaceEvent::Pointer(PointerEvent::Up | PointerEvent::Leave) => self.end_stroke(),
            SurfaceEvent::Command(SurfaceCommand::Undo) => self.undo(),
            SurfaceEvent::Command(SurfaceCommand::Redo) => self.redo(),
            SurfaceEvent::Command(SurfaceCommand::Clear) => self.clear(),
            SurfaceEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Starts a new gesture at `point`.
    ///
    /// Ignored for tools that don't capture strokes (select, text), for
    /// non-positive sizes and for non-finite points. A gesture that is still
    /// active is discarded without being committed.
    pub fn begin_stroke(&mut self, point: Point, tool: Tool, color: Color, size: f64) {
        if !tool.captures_strokes() {
            debug!("Ignoring pointer-down: {tool} does not draw");
            return;
        }
        if !size.is_finite() || size <= 0.0 {
            debug!("Ignoring pointer-down with invalid size {size}");
            return;
        }
        if !point.is_finite() {
            debug!("Ignoring pointer-down at non-finite point {point:?}");
            return;
        }

        let abandoned = self.active.replace(Stroke::begin(point, tool, color, size));
        if let Some(abandoned) = abandoned {
            debug!(
                "Discarding unfinished {} stroke ({} points)",
                abandoned.tool(),
                abandoned.point_count()
            );
            // Drop the stale preview
            self.repaint();
        }
    }

    /// Appends `point` to the active gesture and repaints with a live preview.
    pub fn extend_stroke(&mut self, point: Point) {
        if !point.is_finite() {
            return;
        }
        let Some(stroke) = self.active.as_mut() else {
            return;
        };
        stroke.push(point);
        self.repaint();
    }

    /// Ends the active gesture, committing the stroke if it has two or more points.
    pub fn end_stroke(&mut self) {
        let Some(stroke) = self.active.take() else {
            return;
        };

        if stroke.is_renderable() {
            debug!(
                "Committing {} stroke with {} points",
                stroke.tool(),
                stroke.point_count()
            );
            self.history.commit(stroke);
        } else {
            debug!("Dropping {} tap with a single point", stroke.tool());
        }
        self.repaint();
    }

    pub fn undo(&mut self) {
        if self.history.undo() {
            self.repaint();
        } else {
            debug!("Nothing to undo");
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo() {
            self.repaint();
        } else {
            debug!("Nothing to redo");
        }
    }

    /// Removes every committed and redoable stroke.
    pub fn clear(&mut self) {
        self.history.clear();
        self.repaint();
    }

    /// Replaces the raster with one of the new size and repaints.
    ///
    /// Stroke coordinates stay in absolute pixels; strokes are not rescaled to
    /// the new bounds.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.width && height == self.height {
            return;
        }

        match create_raster(width, height) {
            Ok(raster) => {
                self.raster = raster;
                self.width = width;
                self.height = height;
            }
            Err(err) => {
                warn!("{err}; keeping {}x{} raster", self.width, self.height);
                return;
            }
        }

        let clipped = self
            .history
            .committed()
            .iter()
            .filter_map(Stroke::bounding_box)
            .filter(|bounds| !bounds.fits_within(width, height))
            .count();
        if clipped > 0 {
            debug!("{clipped} stroke(s) extend beyond the resized {width}x{height} surface");
        }

        self.repaint();
    }

    /// Samples the raster at `(x, y)`. Returns `None` outside the surface.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.raster.flush();
        let stride = self.raster.stride() as usize;
        let data = self.raster.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        let bytes: [u8; 4] = data.get(offset..offset + 4)?.try_into().ok()?;
        let argb = u32::from_ne_bytes(bytes);

        Some(Pixel {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        })
    }

    /// Full redraw: committed strokes, then the in-progress stroke as a preview.
    fn repaint(&mut self) {
        let ctx = match cairo::Context::new(&self.raster) {
            Ok(ctx) => ctx,
            Err(err) => {
                warn!("Failed to create drawing context: {err}");
                return;
            }
        };

        render::clear_surface(&ctx);
        render::render_strokes(&ctx, self.history.committed());
        if let Some(preview) = &self.active {
            render::render_stroke(&ctx, preview);
        }
    }
}

fn create_raster(width: u32, height: u32) -> Result<cairo::ImageSurface, SurfaceError> {
    let as_i32 = |value: u32| i32::try_from(value).unwrap_or(i32::MAX);
    cairo::ImageSurface::create(cairo::Format::ARgb32, as_i32(width), as_i32(height))
        .map_err(|source| SurfaceError::Raster {
            width,
            height,
            source,
        })
}
