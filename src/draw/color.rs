//! RGBA color type, hex parsing and the toolbar palette.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) RGBA with each channel in `0.0..=1.0`.
///
/// ```
/// use inkslate::draw::Color;
/// assert_eq!(Color::from_hex("#FF0000"), Some(Color::new(1.0, 0.0, 0.0, 1.0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Opacity; tool opacity multiplies into this at render time
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 byte components.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return None;
        }

        let channel = |index: usize| u8::from_str_radix(&digits[index..index + 2], 16).ok();
        let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
        if digits.len() == 8 {
            color.a = channel(6)? as f64 / 255.0;
        }
        Some(color)
    }

    /// Returns this color with its alpha multiplied by `opacity`.
    pub fn with_opacity(self, opacity: f64) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Near-black handwriting ink (#1C1C1E)
pub const INK: Color = Color::from_rgb8(0x1C, 0x1C, 0x1E);

/// Correction red (#EF4444)
pub const RED: Color = Color::from_rgb8(0xEF, 0x44, 0x44);

/// Blue (#3B82F6)
pub const BLUE: Color = Color::from_rgb8(0x3B, 0x82, 0xF6);

/// Green (#10B981)
pub const GREEN: Color = Color::from_rgb8(0x10, 0xB9, 0x81);

/// Amber (#F59E0B)
pub const AMBER: Color = Color::from_rgb8(0xF5, 0x9E, 0x0B);

/// Violet (#8B5CF6)
pub const VIOLET: Color = Color::from_rgb8(0x8B, 0x5C, 0xF6);

/// Pink (#EC4899)
pub const PINK: Color = Color::from_rgb8(0xEC, 0x48, 0x99);

/// Gray (#6B7280)
pub const GRAY: Color = Color::from_rgb8(0x6B, 0x72, 0x80);

/// Pure black
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Pure white, also the default paper color
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// The eight swatches offered by the toolbar color picker, in display order.
pub const PALETTE: [Color; 8] = [INK, RED, BLUE, GREEN, AMBER, VIOLET, PINK, GRAY];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_and_eight_digit_hex() {
        assert_eq!(Color::from_hex("#EF4444"), Some(RED));
        assert_eq!(Color::from_hex("1c1c1e"), Some(INK));

        let translucent = Color::from_hex("#00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#FFF").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn with_opacity_scales_alpha_only() {
        let faded = BLUE.with_opacity(0.35);
        assert_eq!((faded.r, faded.g, faded.b), (BLUE.r, BLUE.g, BLUE.b));
        assert!((faded.a - 0.35).abs() < 1e-9);
    }
}
