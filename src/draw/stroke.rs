//! Point and stroke definitions for freehand gestures.

use super::color::Color;
use crate::input::Tool;
use crate::util::Rect;

/// A sampled pointer position in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

/// One continuous pointer gesture.
///
/// Tool, color and size are fixed when the gesture starts. Points can only be
/// appended by the surface that owns the stroke, and only while its gesture
/// is active.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    tool: Tool,
    color: Color,
    size: f64,
}

impl Stroke {
    pub(crate) fn begin(start: Point, tool: Tool, color: Color, size: f64) -> Self {
        Self {
            points: vec![start],
            tool,
            color,
            size,
        }
    }

    pub(crate) fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// A single tap (fewer than two points) never produces a visible mark.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Axis-aligned bounds of the stroke, padded by half the rendered width.
    pub fn bounding_box(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

        for point in &self.points[1..] {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        let padding = (super::render::Ink::for_stroke(self).width / 2.0).max(1.0);
        Rect::from_min_max_f64(
            min_x - padding,
            min_y - padding,
            max_x + padding,
            max_y + padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::INK;

    fn stroke(tool: Tool, size: f64, points: &[(f64, f64)]) -> Stroke {
        let mut stroke = Stroke::begin(points[0].into(), tool, INK, size);
        for &p in &points[1..] {
            stroke.push(p.into());
        }
        stroke
    }

    #[test]
    fn single_point_is_not_renderable() {
        let tap = stroke(Tool::Pen, 2.0, &[(5.0, 5.0)]);
        assert!(!tap.is_renderable());
        assert_eq!(tap.point_count(), 1);
    }

    #[test]
    fn bounding_box_covers_pen_width() {
        let line = stroke(Tool::Pen, 6.0, &[(10.0, 20.0), (30.0, 40.0)]);
        let rect = line.bounding_box().expect("stroke should have bounds");
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (7, 17, 26, 26));
    }

    #[test]
    fn bounding_box_grows_with_highlighter_width() {
        let pen = stroke(Tool::Pen, 2.0, &[(50.0, 50.0), (60.0, 50.0)]);
        let marker = stroke(Tool::Highlighter, 2.0, &[(50.0, 50.0), (60.0, 50.0)]);
        let pen_box = pen.bounding_box().unwrap();
        let marker_box = marker.bounding_box().unwrap();
        assert!(marker_box.height > pen_box.height);
        assert_eq!(marker_box.height, 12);
    }

    #[test]
    fn midpoint_is_halfway() {
        let mid = Point::new(0.0, 10.0).midpoint(Point::new(4.0, 20.0));
        assert_eq!(mid, Point::new(2.0, 15.0));
    }
}
