//! User settings read from `~/.config/inkslate/config.toml`.
//!
//! Covers the initial toolbar selection, the surface size and PNG export.
//! A missing file means defaults; out-of-range values are clamped on load.

pub mod enums;
pub mod types;

pub use enums::{BackgroundMode, ColorSpec};
pub use types::{DrawingConfig, ExportConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted base stroke size.
pub const MIN_STROKE_SIZE: f64 = 0.5;
/// Largest accepted base stroke size.
pub const MAX_STROKE_SIZE: f64 = 64.0;
/// Largest accepted surface edge in pixels.
pub const MAX_SURFACE_EDGE: u32 = 8192;

/// Root of the TOML document. Every section and key is optional.
///
/// ```toml
/// [drawing]
/// default_tool = "pen"
/// default_color = "ink"
/// default_size = 2.0
///
/// [surface]
/// width = 896
/// height = 780
///
/// [export]
/// background = "paper"
/// paper_color = [255, 255, 255]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Initial toolbar selection (tool, color, size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Drawing surface dimensions
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// PNG export preferences
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Pulls out-of-range values back into range, warning for each one.
    ///
    /// Sizes clamp to 0.5 - 64.0 and surface edges to 1 - 8192. Unresolvable
    /// colors and an empty filename template revert to their defaults.
    pub fn validate_and_clamp(&mut self) {
        let size = self.drawing.default_size;
        if !size.is_finite() {
            log::warn!("Invalid default_size {size}, falling back to 2.0");
            self.drawing.default_size = 2.0;
        } else if !(MIN_STROKE_SIZE..=MAX_STROKE_SIZE).contains(&size) {
            log::warn!(
                "Invalid default_size {:.1}, clamping to {MIN_STROKE_SIZE}-{MAX_STROKE_SIZE} range",
                size
            );
            self.drawing.default_size = size.clamp(MIN_STROKE_SIZE, MAX_STROKE_SIZE);
        }

        if self.drawing.default_color.try_to_color().is_none() {
            log::warn!(
                "Invalid default_color {:?}, falling back to 'ink'",
                self.drawing.default_color
            );
            self.drawing.default_color = ColorSpec::Name("ink".to_string());
        }

        for (name, value) in [
            ("width", &mut self.surface.width),
            ("height", &mut self.surface.height),
        ] {
            if !(1..=MAX_SURFACE_EDGE).contains(&*value) {
                log::warn!("Invalid surface {name} {value}, clamping to 1-{MAX_SURFACE_EDGE} range");
                *value = (*value).clamp(1, MAX_SURFACE_EDGE);
            }
        }

        if self.export.paper_color.try_to_color().is_none() {
            log::warn!(
                "Invalid paper_color {:?}, falling back to white",
                self.export.paper_color
            );
            self.export.paper_color = ColorSpec::Rgb([255, 255, 255]);
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty filename_template, falling back to default");
            self.export.filename_template = types::default_filename_template();
        }
    }

    /// `$XDG_CONFIG_HOME/inkslate/config.toml`, or the platform equivalent.
    pub fn get_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("No user config directory available")?;
        Ok(base.join("inkslate").join("config.toml"))
    }

    /// Reads the default config file. A missing file yields [`Config::default`];
    /// an unreadable or malformed one is an error.
    pub fn load() -> Result<Self> {
        let path = Self::get_config_path()?;
        if path.exists() {
            return Self::load_from(&path);
        }

        info!("No config at {}, using defaults", path.display());
        Ok(Self::default())
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config = Self::from_toml(&source)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("{config:?}");
        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serializes the config to TOML at `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let rendered = toml::to_string_pretty(self).context("Config is not representable as TOML")?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(path, rendered)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Writes [`EXAMPLE_CONFIG`] to the default path. Refuses to overwrite.
    pub fn create_default_file() -> Result<PathBuf> {
        let path = Self::get_config_path()?;
        anyhow::ensure!(
            !path.exists(),
            "Config file already exists at {}",
            path.display()
        );

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(&path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!("Created default config at {}", path.display());
        Ok(path)
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Annotated example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");
