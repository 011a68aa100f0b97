//! Configuration type definitions.

use super::enums::{BackgroundMode, ColorSpec};
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the toolbar selection when the surface first opens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial tool (select, pen, pencil, highlighter, eraser, text, line, circle, rect)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Initial pen color - a palette name, "#RRGGBB", or an RGB array like `[239, 68, 68]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial base stroke size in pixels (valid range: 0.5 - 64.0)
    #[serde(default = "default_size")]
    pub default_size: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_color: default_color(),
            default_size: default_size(),
        }
    }
}

/// Drawing surface dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SurfaceConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_height")]
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Composite strokes onto paper or keep the raster transparent
    #[serde(default = "default_background")]
    pub background: BackgroundMode,

    /// Paper color used when `background = "paper"`
    #[serde(default = "default_paper_color")]
    pub paper_color: ColorSpec,

    /// Directory for generated file names (supports `~/`)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template without extension (chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            paper_color: default_paper_color(),
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Tool {
    Tool::Pen
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("ink".to_string())
}

fn default_size() -> f64 {
    2.0
}

fn default_width() -> u32 {
    896
}

fn default_height() -> u32 {
    780
}

fn default_background() -> BackgroundMode {
    BackgroundMode::Paper
}

fn default_paper_color() -> ColorSpec {
    ColorSpec::Rgb([255, 255, 255])
}

fn default_save_directory() -> String {
    "~/Pictures/Inkslate".to_string()
}

pub(super) fn default_filename_template() -> String {
    "inkslate_%Y-%m-%d_%H%M%S".to_string()
}
