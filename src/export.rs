//! PNG export of the drawing surface raster.

use crate::config::{BackgroundMode, ExportConfig};
use crate::draw::{Color, DrawingSurface, render};
use chrono::Local;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a PNG.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error while compositing: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Resolved export settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Directory to save generated file names to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
    /// Solid color under the strokes, or `None` for a transparent PNG.
    pub background: Option<Color>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl ExportOptions {
    pub fn from_config(config: &ExportConfig) -> Self {
        let background = match config.background {
            BackgroundMode::Paper => Some(config.paper_color.to_color()),
            BackgroundMode::Transparent => None,
        };
        Self {
            save_directory: expand_tilde(&config.save_directory),
            filename_template: config.filename_template.clone(),
            background,
        }
    }

    /// A fresh path inside the save directory, named from the template and current time.
    pub fn generated_path(&self) -> PathBuf {
        self.save_directory
            .join(generate_filename(&self.filename_template, "png"))
    }
}

/// Expands chrono specifiers in `template` with the local time and appends `.{extension}`.
pub fn generate_filename(template: &str, extension: &str) -> String {
    format!("{}.{extension}", Local::now().format(template))
}

/// Ensure the directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<(), ExportError> {
    if !directory.as_os_str().is_empty() && !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(())
}

/// Resolves a leading `~/` against the home directory. Other paths pass through.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

/// Writes the surface raster to `path` as PNG, optionally over a solid background.
///
/// Erased areas stay transparent in the raster itself; the background only
/// shows through them in the exported file.
pub fn export_png(
    surface: &DrawingSurface,
    background: Option<Color>,
    path: &Path,
) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent() {
        ensure_directory_exists(parent)?;
    }

    let flattened = flatten(surface, background)?;
    let mut writer = BufWriter::new(File::create(path)?);
    flattened.write_to_png(&mut writer)?;

    log::info!(
        "Exported {}x{} drawing to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(path.to_path_buf())
}

/// Composites the raster over `background` into a new image surface.
fn flatten(
    surface: &DrawingSurface,
    background: Option<Color>,
) -> Result<cairo::ImageSurface, ExportError> {
    let raster = surface.raster();
    let output =
        cairo::ImageSurface::create(cairo::Format::ARgb32, raster.width(), raster.height())?;

    {
        let ctx = cairo::Context::new(&output)?;
        if let Some(color) = background {
            render::fill_background(&ctx, color);
        }
        ctx.set_source_surface(raster, 0.0, 0.0)?;
        ctx.paint()?;
    }

    output.flush();
    Ok(output)
}
