//! Midpoint-smoothed path construction for freehand strokes.

use super::stroke::Point;

/// One segment of a smoothed stroke outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    /// Quadratic curve from the current point through `ctrl` to `to`
    QuadTo { ctrl: Point, to: Point },
    LineTo(Point),
}

/// Builds the smoothed path through `points`.
///
/// Each interior point becomes the control point of a quadratic segment that
/// ends at the midpoint between it and the next raw point; the path closes
/// with a straight segment onto the last raw point. Fewer than two points
/// yield an empty path.
pub fn smooth_path(points: &[Point]) -> Vec<PathSegment> {
    let [first, .., last] = points else {
        return Vec::new();
    };

    let mut segments = Vec::with_capacity(points.len() + 1);
    segments.push(PathSegment::MoveTo(*first));
    for pair in points[1..].windows(2) {
        segments.push(PathSegment::QuadTo {
            ctrl: pair[0],
            to: pair[0].midpoint(pair[1]),
        });
    }
    segments.push(PathSegment::LineTo(*last));
    segments
}

/// Converts a quadratic segment into the equivalent cubic control points.
pub fn quad_to_cubic(from: Point, ctrl: Point, to: Point) -> (Point, Point) {
    const TWO_THIRDS: f64 = 2.0 / 3.0;
    (
        Point::new(
            from.x + TWO_THIRDS * (ctrl.x - from.x),
            from.y + TWO_THIRDS * (ctrl.y - from.y),
        ),
        Point::new(
            to.x + TWO_THIRDS * (ctrl.x - to.x),
            to.y + TWO_THIRDS * (ctrl.y - to.y),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
        raw.iter().map(|&p| p.into()).collect()
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(smooth_path(&[]).is_empty());
        assert!(smooth_path(&pts(&[(1.0, 1.0)])).is_empty());
    }

    #[test]
    fn two_points_are_a_straight_line() {
        let path = smooth_path(&pts(&[(0.0, 0.0), (10.0, 0.0)]));
        assert_eq!(
            path,
            vec![
                PathSegment::MoveTo(Point::new(0.0, 0.0)),
                PathSegment::LineTo(Point::new(10.0, 0.0)),
            ]
        );
    }

    #[test]
    fn interior_points_become_midpoint_quadratics() {
        let path = smooth_path(&pts(&[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0), (40.0, 30.0)]));
        assert_eq!(
            path,
            vec![
                PathSegment::MoveTo(Point::new(10.0, 10.0)),
                PathSegment::QuadTo {
                    ctrl: Point::new(20.0, 20.0),
                    to: Point::new(25.0, 15.0),
                },
                PathSegment::QuadTo {
                    ctrl: Point::new(30.0, 10.0),
                    to: Point::new(35.0, 20.0),
                },
                PathSegment::LineTo(Point::new(40.0, 30.0)),
            ]
        );
    }

    #[test]
    fn cubic_conversion_of_collinear_quad_stays_on_line() {
        let (c1, c2) = quad_to_cubic(
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(6.0, 0.0),
        );
        assert!((c1.x - 2.0).abs() < 1e-9 && c1.y == 0.0);
        assert!((c2.x - 4.0).abs() < 1e-9 && c2.y == 0.0);
    }
}
