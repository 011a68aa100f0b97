//! Toolbar selection state: the tool, color and size applied to new strokes.

use crate::config::DrawingConfig;
use crate::draw::Color;
use crate::input::tool::{CursorHint, SizePreset, Tool};
use log::{debug, warn};

/// Current toolbar selection.
///
/// The surface reads this on every pointer-down; changing it mid-gesture does
/// not affect the stroke already in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    tool: Tool,
    color: Color,
    size: f64,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::from_config(&DrawingConfig::default())
    }
}

impl ToolState {
    pub fn new(tool: Tool, color: Color, size: f64) -> Self {
        let mut state = Self {
            tool,
            color,
            size: SizePreset::Small.value(),
        };
        state.set_size(size);
        state
    }

    /// Builds the initial selection from the `[drawing]` config section.
    pub fn from_config(config: &DrawingConfig) -> Self {
        Self::new(
            config.default_tool,
            config.default_color.to_color(),
            config.default_size,
        )
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

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool changed: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("Color changed to {}", crate::util::color_to_name(&color));
        self.color = color;
    }

    /// Cursor the host should show over the surface for the current tool.
    pub fn cursor(&self) -> CursorHint {
        self.tool.cursor()
    }

    /// Sets the base stroke size.
    ///
    /// Returns `false` (keeping the previous size) for non-positive or
    /// non-finite values.
    pub fn set_size(&mut self, size: f64) -> bool {
        if !size.is_finite() || size <= 0.0 {
            warn!("Ignoring invalid stroke size {size}; keeping {:.1}", self.size);
            return false;
        }
        self.size = size;
        true
    }

    pub fn set_size_preset(&mut self, preset: SizePreset) {
        self.size = preset.value();
    }
}
