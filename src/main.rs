use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use inkslate::config::{BackgroundMode, Config};
use inkslate::draw::DrawingSurface;
use inkslate::export::{self, ExportOptions};
use inkslate::input::ToolState;
use inkslate::script::Script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkslate")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKSLATE_GIT_HASH"), ")"))]
#[command(about = "Freehand drawing surface: replay gesture scripts and export PNGs")]
struct Cli {
    /// Replay a gesture script (JSON) and export the result as PNG
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Output PNG path (defaults to a generated name in the export directory)
    #[arg(long, short = 'o', value_name = "PNG", requires = "replay")]
    output: Option<PathBuf>,

    /// Surface width in pixels (overrides script and config)
    #[arg(long, value_name = "PX", requires = "replay")]
    width: Option<u32>,

    /// Surface height in pixels (overrides script and config)
    #[arg(long, value_name = "PX", requires = "replay")]
    height: Option<u32>,

    /// Export background (transparent or paper)
    #[arg(long, value_name = "MODE", requires = "replay")]
    background: Option<BackgroundMode>,

    /// Load this config file instead of ~/.config/inkslate/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the annotated default config to ~/.config/inkslate/config.toml
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "replay")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created config at {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.replay.as_deref() else {
        print_usage();
        return Ok(());
    };

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(script_path)?;

    let width = cli
        .width
        .or(script.width)
        .unwrap_or(config.surface.width);
    let height = cli
        .height
        .or(script.height)
        .unwrap_or(config.surface.height);
    log::info!(
        "Replaying {} on a {}x{} surface",
        script_path.display(),
        width,
        height
    );

    let mut surface = DrawingSurface::new(width, height)?;
    let mut tools = ToolState::from_config(&config.drawing);
    let summary = script.replay(&mut surface, &mut tools)?;

    let mut export_config = config.export.clone();
    if let Some(background) = cli.background {
        export_config.background = background;
    }
    let options = ExportOptions::from_config(&export_config);
    let output = cli.output.unwrap_or_else(|| options.generated_path());

    let written = export::export_png(&surface, options.background, &output)
        .with_context(|| format!("Failed to export {}", output.display()))?;

    println!(
        "{} ({} strokes, {} undone)",
        written.display(),
        summary.committed,
        summary.redoable
    );

    Ok(())
}

fn print_usage() {
    println!("inkslate: Freehand drawing surface");
    println!();
    println!("Usage:");
    println!("  inkslate --replay <SCRIPT> [--output <PNG>]   Replay a gesture script");
    println!("  inkslate --init-config                       Write the default config file");
    println!("  inkslate --help                              Show help");
    println!();
    println!("Gesture scripts are JSON documents:");
    println!("  {{ \"width\": 800, \"height\": 600, \"events\": [");
    println!("      {{ \"type\": \"tool\", \"tool\": \"highlighter\" }},");
    println!("      {{ \"type\": \"down\", \"x\": 10, \"y\": 10 }},");
    println!("      {{ \"type\": \"move\", \"x\": 80, \"y\": 12 }},");
    println!("      {{ \"type\": \"up\" }},");
    println!("      {{ \"type\": \"undo\" }} ] }}");
    println!();
    println!("Tools: select, pen, pencil, highlighter, eraser, text, line, circle, rect");
    println!("Commands: undo, redo, clear, resize");
}
