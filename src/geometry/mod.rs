//! Cell-granular geometry.
//!
//! Only polygon containment lives here. Selection and filling operate on a
//! [`FrameBuffer`](crate::renderer::FrameBuffer) and are implemented there.

pub mod polygon;

pub use polygon::{Interpolation, Polygon};
