//! Configuration enum types.

use crate::draw::{Color, color::INK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a palette name, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Palette name
/// default_color = "ink"
///
/// # Hex string
/// default_color = "#EF4444"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Palette name (ink, red, blue, green, amber, violet, pink, gray, black, white)
    /// or `#RRGGBB` / `#RRGGBBAA`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Resolves the specification, returning `None` for unknown names or bad hex.
    pub fn try_to_color(&self) -> Option<Color> {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name),
            ColorSpec::Rgb([r, g, b]) => Some(Color::from_rgb8(*r, *g, *b)),
        }
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Unknown names default to ink with a warning.
    pub fn to_color(&self) -> Color {
        self.try_to_color().unwrap_or_else(|| {
            warn!("Unknown color {:?}, using ink", self);
            INK
        })
    }
}

/// What the exported PNG is composited onto.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundMode {
    /// Raw raster with transparent, erased areas
    Transparent,
    /// Raster over a solid paper color
    Paper,
}

impl std::str::FromStr for BackgroundMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transparent" => Ok(BackgroundMode::Transparent),
            "paper" => Ok(BackgroundMode::Paper),
            other => Err(format!(
                "unknown background '{other}' (expected 'transparent' or 'paper')"
            )),
        }
    }
}
