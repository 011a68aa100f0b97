//! Palette name lookups shared by config files and gesture scripts, plus the
//! [`Rect`] used for stroke bounds.

use crate::draw::{Color, color::*};

/// Looks up a color by name, ignoring case and surrounding whitespace.
///
/// - Toolbar palette: "ink", "red", "blue", "green", "amber", "violet", "pink", "gray"
/// - Extras: "black", "white", plus the aliases "grey", "yellow" (amber) and "purple" (violet)
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "ink" => Some(INK),
        "red" => Some(RED),
        "blue" => Some(BLUE),
        "green" => Some(GREEN),
        "amber" | "yellow" => Some(AMBER),
        "violet" | "purple" => Some(VIOLET),
        "pink" => Some(PINK),
        "gray" | "grey" => Some(GRAY),
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        _ => None,
    }
}

/// Parses either a palette name or a `#RRGGBB[AA]` hex string.
pub fn parse_color(spec: &str) -> Option<Color> {
    if spec.trim_start().starts_with('#') {
        Color::from_hex(spec)
    } else {
        name_to_color(spec)
    }
}

/// Maps a Color value to its palette name, or "Custom".
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMED: [(&str, Color); 10] = [
        ("Ink", INK),
        ("Red", RED),
        ("Blue", BLUE),
        ("Green", GREEN),
        ("Amber", AMBER),
        ("Violet", VIOLET),
        ("Pink", PINK),
        ("Gray", GRAY),
        ("Black", BLACK),
        ("White", WHITE),
    ];

    NAMED
        .iter()
        .find(|(_, named)| {
            (named.r - color.r).abs() < 0.01
                && (named.g - color.g).abs() < 0.01
                && (named.b - color.b).abs() < 0.01
        })
        .map(|(name, _)| *name)
        .unwrap_or("Custom")
}

/// Axis-aligned rectangle in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Rectangle spanning `min..max` on both axes.
    ///
    /// Degenerate extents still cover one pixel. Spans wider than `i32::MAX`
    /// saturate.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let extent = |min: i32, max: i32| {
            let span = (i64::from(max) - i64::from(min)).max(i64::from(min == max));
            i32::try_from(span).unwrap_or(i32::MAX)
        };
        Self::new(min_x, min_y, extent(min_x, max_x), extent(min_y, max_y))
    }

    /// Builds a rectangle covering fractional bounds (floor of min, ceil of max).
    ///
    /// Bounds beyond the `i32` range are pinned to it.
    pub fn from_min_max_f64(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        Self::from_min_max(
            min_x.floor() as i32,
            min_y.floor() as i32,
            max_x.ceil() as i32,
            max_y.ceil() as i32,
        )
    }

    /// Returns true when the rectangle lies entirely inside `0..width` x `0..height`.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && i64::from(self.x) + i64::from(self.width) <= i64::from(width)
            && i64::from(self.y) + i64::from(self.height) <= i64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_resolve() {
        assert_eq!(name_to_color("Ink"), Some(INK));
        assert_eq!(name_to_color("grey"), Some(GRAY));
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn parse_color_accepts_names_and_hex() {
        assert_eq!(parse_color("#3B82F6"), Some(BLUE));
        assert_eq!(parse_color("violet"), Some(VIOLET));
        assert!(parse_color("#12").is_none());
    }

    #[test]
    fn color_to_name_matches_palette() {
        assert_eq!(color_to_name(&RED), "Red");
        assert_eq!(color_to_name(&Color::from_rgb8(0x1C, 0x1C, 0x1E)), "Ink");
        assert_eq!(color_to_name(&Color::new(0.42, 0.1, 0.9, 1.0)), "Custom");
    }

    #[test]
    fn rect_from_degenerate_bounds_covers_a_pixel() {
        let rect = Rect::from_min_max(4, 4, 4, 4).unwrap();
        assert_eq!((rect.width, rect.height), (1, 1));
    }

    #[test]
    fn far_off_bounds_saturate_instead_of_overflowing() {
        let edge = Rect::from_min_max_f64(3e9 - 1.0, 9.0, 3e9 + 1.0, 21.0).unwrap();
        assert_eq!((edge.x, edge.width), (i32::MAX, 1));
        assert!(!edge.fits_within(100, 100));

        let span = Rect::from_min_max_f64(-3e9 - 1.0, 9.0, 3e9 + 1.0, 21.0).unwrap();
        assert_eq!((span.x, span.width), (i32::MIN, i32::MAX));
        assert!(!span.fits_within(100, 100));
    }

    #[test]
    fn inverted_bounds_have_no_rect() {
        assert!(Rect::from_min_max(10, 0, 5, 4).is_none());
    }

    #[test]
    fn fits_within_checks_all_edges() {
        let rect = Rect::new(10, 10, 20, 20).unwrap();
        assert!(rect.fits_within(30, 30));
        assert!(!rect.fits_within(29, 30));
        assert!(!Rect::new(-1, 0, 5, 5).unwrap().fits_within(100, 100));
    }
}
