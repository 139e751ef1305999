//! Terminal renderer - the output layer.
//!
//! The renderer knows only about cells. It takes a [`FrameBuffer`], diffs it
//! against the last committed frame, and hands the changed cells to an
//! [`OutputDevice`] as one batch.
//!
//! - [`FrameBuffer`]: double-buffered cell grid plus polygon fill
//! - [`DiffRenderer`]: dirty diff and commit
//! - [`AnsiDevice`]: encodes commands as ANSI escapes for a terminal

pub mod ansi;
pub mod buffer;
pub mod device;
pub mod diff;
pub mod output;

pub use buffer::FrameBuffer;
pub use device::{OutputDevice, RenderCommand};
pub use diff::{DiffRenderer, FrameReport};
pub use output::{AnsiDevice, OutputBuffer};
