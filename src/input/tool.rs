//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing tool selection.
///
/// The active tool is captured when a gesture starts and determines how the
/// resulting stroke is rendered for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Lasso/selection - gestures are ignored
    Select,
    /// Opaque freehand ink (default)
    Pen,
    /// Freehand ink at 70% opacity
    Pencil,
    /// Wide translucent marker
    Highlighter,
    /// Removes pixels underneath instead of painting
    Eraser,
    /// Text placement - gestures are ignored
    Text,
    /// Shape tools fall back to pen rendering
    Line,
    Circle,
    Rect,
}

/// Pointer cursor shown over the surface for a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Crosshair,
    Text,
    /// Round eraser disc
    Eraser,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 9] = [
        Tool::Select,
        Tool::Pen,
        Tool::Pencil,
        Tool::Highlighter,
        Tool::Eraser,
        Tool::Text,
        Tool::Line,
        Tool::Circle,
        Tool::Rect,
    ];

    /// Whether a pointer gesture with this tool records a stroke.
    pub fn captures_strokes(self) -> bool {
        !matches!(self, Tool::Select | Tool::Text)
    }

    pub fn cursor(self) -> CursorHint {
        match self {
            Tool::Eraser => CursorHint::Eraser,
            Tool::Text => CursorHint::Text,
            Tool::Select => CursorHint::Default,
            _ => CursorHint::Crosshair,
        }
    }

    /// Lowercase name as used in config files and gesture scripts.
    pub fn name(self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Pen => "pen",
            Tool::Pencil => "pencil",
            Tool::Highlighter => "highlighter",
            Tool::Eraser => "eraser",
            Tool::Text => "text",
            Tool::Line => "line",
            Tool::Circle => "circle",
            Tool::Rect => "rect",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Tool::ALL
            .into_iter()
            .find(|tool| tool.name() == wanted)
            .ok_or_else(|| format!("unknown tool '{s}'"))
    }
}

/// Stroke size presets offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizePreset {
    ExtraSmall,
    Small,
    Medium,
    Large,
}

impl SizePreset {
    pub fn value(self) -> f64 {
        match self {
            SizePreset::ExtraSmall => 1.0,
            SizePreset::Small => 2.0,
            SizePreset::Medium => 4.0,
            SizePreset::Large => 8.0,
        }
    }

    /// Parses the toolbar labels `xs`, `s`, `m` and `l` (case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "xs" => Some(SizePreset::ExtraSmall),
            "s" => Some(SizePreset::Small),
            "m" => Some(SizePreset::Medium),
            "l" => Some(SizePreset::Large),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_and_text_do_not_capture() {
        for tool in Tool::ALL {
            let expected = !matches!(tool, Tool::Select | Tool::Text);
            assert_eq!(tool.captures_strokes(), expected, "{tool}");
        }
    }

    #[test]
    fn names_parse_back() {
        for tool in Tool::ALL {
            assert_eq!(tool.name().parse::<Tool>(), Ok(tool));
        }
        assert_eq!(" Highlighter ".parse::<Tool>(), Ok(Tool::Highlighter));
        assert!("lasso".parse::<Tool>().is_err());
    }

    #[test]
    fn cursor_hints_follow_tool() {
        assert_eq!(Tool::Eraser.cursor(), CursorHint::Eraser);
        assert_eq!(Tool::Text.cursor(), CursorHint::Text);
        assert_eq!(Tool::Select.cursor(), CursorHint::Default);
        assert_eq!(Tool::Pencil.cursor(), CursorHint::Crosshair);
    }

    #[test]
    fn size_presets_match_toolbar() {
        assert_eq!(SizePreset::from_label("XS").map(SizePreset::value), Some(1.0));
        assert_eq!(SizePreset::from_label("l").map(SizePreset::value), Some(8.0));
        assert!(SizePreset::from_label("xl").is_none());
    }
}
