//! Freehand drawing surface with pen, pencil, highlighter and eraser strokes.
//!
//! The [`draw::DrawingSurface`] records pointer gestures as vector strokes,
//! renders them into a Cairo raster and supports linear undo/redo. The
//! remaining modules provide the pieces a host needs around it: toolbar state
//! and event types ([`input`]), configuration ([`config`]), gesture script
//! replay ([`script`]) and PNG export ([`export`]).

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
