//! # cellgrid
//!
//! Character-grid renderer with polygon fills and diff-based terminal output.
//!
//! ## Architecture
//!
//! A [`RenderContext`] owns a double-buffered grid of cells. Drawing calls
//! mutate the `current` grid; rendering diffs it against the `previous` grid
//! and sends only the changed cells to an [`OutputDevice`]:
//! ```text
//! configure(extent) → fill_area / cell_at → render_frame → OutputDevice::draw
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Color, Cell, Point, Extent)
//! - [`geometry`] - Even-odd polygon containment
//! - [`renderer`] - FrameBuffer, diff renderer, ANSI device
//! - [`context`] - The owned drawing surface
//! - [`terminal`] - Alternate-screen session via crossterm

pub mod config;
pub mod context;
pub mod error;
pub mod geometry;
pub mod renderer;
pub mod terminal;
pub mod types;

pub use types::*;

pub use config::RenderConfig;
pub use context::RenderContext;
pub use error::{GridError, Result};
pub use geometry::{Interpolation, Polygon};
pub use renderer::{
    AnsiDevice, DiffRenderer, FrameBuffer, FrameReport, OutputBuffer, OutputDevice, RenderCommand,
};
pub use terminal::{terminal_extent, TerminalSession};
