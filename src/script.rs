//! Gesture scripts: recorded host events replayed against a drawing surface.
//!
//! A script is a JSON document with optional surface dimensions and an ordered
//! list of events. Toolbar events (`tool`, `color`, `size`) update the
//! [`ToolState`]; everything else is forwarded to [`DrawingSurface::update`].

use crate::draw::{Color, DrawingSurface, Point};
use crate::input::{PointerEvent, SizePreset, SurfaceCommand, SurfaceEvent, Tool, ToolState};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading a gesture script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Failed to read script {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid gesture script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Event {index}: unknown color '{color}'")]
    UnknownColor { index: usize, color: String },

    #[error("Event {index}: unknown size preset '{label}'")]
    UnknownSize { index: usize, label: String },
}

/// Stroke size given either as a number or a toolbar preset label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeSpec {
    Value(f64),
    Preset(String),
}

/// One recorded host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Tool { tool: Tool },
    Color { color: String },
    Size { size: SizeSpec },
    Undo,
    Redo,
    Clear,
    Resize { width: u32, height: u32 },
}

/// A parsed gesture script.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    /// Initial surface width (falls back to configuration)
    #[serde(default)]
    pub width: Option<u32>,
    /// Initial surface height (falls back to configuration)
    #[serde(default)]
    pub height: Option<u32>,
    pub events: Vec<ScriptEvent>,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub events: usize,
    pub committed: usize,
    pub redoable: usize,
}

/// Script event resolved against the palette and size presets.
enum Step {
    Surface(SurfaceEvent),
    Tool(Tool),
    Color(Color),
    Size(f64),
}

impl Script {
    /// Parses a script and checks every color and size preset up front.
    pub fn from_json(source: &str) -> Result<Self, ScriptError> {
        let script: Script = serde_json::from_str(source)?;
        script.resolve()?;
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let source = fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&source)?;
        debug!(
            "Loaded gesture script {} ({} events)",
            path.display(),
            script.events.len()
        );
        Ok(script)
    }

    /// Applies every event in order.
    pub fn replay(
        &self,
        surface: &mut DrawingSurface,
        tools: &mut ToolState,
    ) -> Result<ReplaySummary, ScriptError> {
        let steps = self.resolve()?;
        for step in &steps {
            match *step {
                Step::Surface(event) => surface.update(event, tools),
                Step::Tool(tool) => tools.set_tool(tool),
                Step::Color(color) => tools.set_color(color),
                Step::Size(size) => {
                    tools.set_size(size);
                }
            }
        }

        let summary = ReplaySummary {
            events: steps.len(),
            committed: surface.history().committed().len(),
            redoable: surface.history().redoable().len(),
        };
        info!(
            "Replayed {} events: {} committed, {} redoable strokes",
            summary.events, summary.committed, summary.redoable
        );
        Ok(summary)
    }

    fn resolve(&self) -> Result<Vec<Step>, ScriptError> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| resolve_event(index, event))
            .collect()
    }
}

fn resolve_event(index: usize, event: &ScriptEvent) -> Result<Step, ScriptError> {
    let step = match event {
        ScriptEvent::Down { x, y } => {
            Step::Surface(PointerEvent::Down(Point::new(*x, *y)).into())
        }
        ScriptEvent::Move { x, y } => {
            Step::Surface(PointerEvent::Move(Point::new(*x, *y)).into())
        }
        ScriptEvent::Up => Step::Surface(PointerEvent::Up.into()),
        ScriptEvent::Leave => Step::Surface(PointerEvent::Leave.into()),
        ScriptEvent::Undo => Step::Surface(SurfaceCommand::Undo.into()),
        ScriptEvent::Redo => Step::Surface(SurfaceCommand::Redo.into()),
        ScriptEvent::Clear => Step::Surface(SurfaceCommand::Clear.into()),
        ScriptEvent::Resize { width, height } => Step::Surface(SurfaceEvent::Resize {
            width: *width,
            height: *height,
        }),
        ScriptEvent::Tool { tool } => Step::Tool(*tool),
        ScriptEvent::Color { color } => {
            let resolved =
                crate::util::parse_color(color).ok_or_else(|| ScriptError::UnknownColor {
                    index,
                    color: color.clone(),
                })?;
            Step::Color(resolved)
        }
        ScriptEvent::Size { size } => match size {
            SizeSpec::Value(value) => Step::Size(*value),
            SizeSpec::Preset(label) => {
                let preset =
                    SizePreset::from_label(label).ok_or_else(|| ScriptError::UnknownSize {
                        index,
                        label: label.clone(),
                    })?;
                Step::Size(preset.value())
            }
        },
    };
    Ok(step)
}
