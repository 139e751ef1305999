//! RenderContext - the public drawing surface.
//!
//! A context owns the frame buffer, the diff renderer and its output device.
//! Every operation goes through `&self` / `&mut self`, so a fill can never
//! interleave with a render, and independent contexts never share state.
//!
//! # Example
//!
//! ```
//! use cellgrid::{Color, Extent, Point, RenderCommand, RenderContext};
//!
//! let mut ctx = RenderContext::new(Vec::<RenderCommand>::new());
//! ctx.configure(Extent::new(5, 5))?;
//!
//! let square = [Point::new(0, 0), Point::new(3, 0), Point::new(3, 3), Point::new(0, 3)];
//! ctx.fill_area(&square, Color::Red, 'X')?;
//!
//! let report = ctx.render_frame()?;
//! assert_eq!(report.emitted, 9);
//! # Ok::<(), cellgrid::GridError>(())
//! ```

use log::debug;

use crate::config::RenderConfig;
use crate::error::{GridError, Result};
use crate::geometry::Polygon;
use crate::renderer::{DiffRenderer, FrameBuffer, FrameReport, OutputDevice};
use crate::types::{Cell, Color, Extent, Point};

/// Owned rendering state: buffers, configuration and device.
pub struct RenderContext<D: OutputDevice> {
    config: RenderConfig,
    buffer: Option<FrameBuffer>,
    renderer: DiffRenderer<D>,
}

impl<D: OutputDevice> RenderContext<D> {
    /// Create an unconfigured context with the default configuration.
    pub fn new(device: D) -> Self {
        Self::with_config(device, RenderConfig::default())
    }

    pub fn with_config(device: D, config: RenderConfig) -> Self {
        Self {
            config,
            buffer: None,
            renderer: DiffRenderer::new(device),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn device(&self) -> &D {
        self.renderer.device()
    }

    pub fn device_mut(&mut self) -> &mut D {
        self.renderer.device_mut()
    }

    pub fn into_device(self) -> D {
        self.renderer.into_device()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Allocate fresh buffers for `extent` and paint them.
    ///
    /// Any previously configured buffers are dropped. An invalid extent leaves
    /// the context untouched. The initial paint syncs every cell, so the
    /// report's `synced` equals the cell count.
    pub fn configure(&mut self, extent: Extent) -> Result<FrameReport> {
        let buffer = FrameBuffer::from_extent(&extent)?;
        debug!(
            "configure {}x{} grid (replacing existing: {})",
            buffer.width(),
            buffer.height(),
            self.buffer.is_some()
        );

        let buffer = self.buffer.insert(buffer);
        if self.config.initial_paint {
            self.renderer.render_full(buffer)
        } else {
            Ok(FrameReport::default())
        }
    }

    #[inline]
    pub fn is_configured(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn buffer(&self) -> Result<&FrameBuffer> {
        self.buffer.as_ref().ok_or(GridError::NotConfigured)
    }

    fn buffer_mut(&mut self) -> Result<&mut FrameBuffer> {
        self.buffer.as_mut().ok_or(GridError::NotConfigured)
    }

    // =========================================================================
    // Polygon Operations
    // =========================================================================

    /// Borrow every cell inside the polygon, in row-major order.
    ///
    /// Writing through the returned references draws into the buffer.
    pub fn select_inside(&mut self, vertices: &[Point]) -> Result<Vec<&mut Cell>> {
        let polygon = Polygon::new(vertices, self.config.interpolation)?;
        Ok(self.buffer_mut()?.select_mut(&polygon))
    }

    /// Paint every cell inside the polygon. Returns the number of cells painted.
    pub fn fill_area(&mut self, vertices: &[Point], color: Color, glyph: char) -> Result<usize> {
        let polygon = Polygon::new(vertices, self.config.interpolation)?;
        Ok(self.buffer_mut()?.fill_polygon(&polygon, color, glyph))
    }

    // =========================================================================
    // Cell Access
    // =========================================================================

    pub fn cell(&self, col: u16, row: u16) -> Result<&Cell> {
        self.buffer()?.cell(col, row)
    }

    pub fn cell_at(&mut self, col: u16, row: u16) -> Result<&mut Cell> {
        self.buffer_mut()?.cell_mut(col, row)
    }

    pub fn color_of(&self, col: u16, row: u16) -> Result<Color> {
        self.buffer()?.color_of(col, row)
    }

    pub fn set_color(&mut self, col: u16, row: u16, color: Color) -> Result<()> {
        self.buffer_mut()?.set_color(col, row, color)
    }

    pub fn glyph_of(&self, col: u16, row: u16) -> Result<char> {
        self.buffer()?.glyph_of(col, row)
    }

    pub fn set_glyph(&mut self, col: u16, row: u16, glyph: char) -> Result<()> {
        self.buffer_mut()?.set_glyph(col, row, glyph)
    }

    pub fn clear_cell(&mut self, col: u16, row: u16) -> Result<()> {
        self.buffer_mut()?.clear_cell(col, row)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Send changed cells to the device and commit the frame.
    pub fn render_frame(&mut self) -> Result<FrameReport> {
        let buffer = self.buffer.as_mut().ok_or(GridError::NotConfigured)?;
        self.renderer.render(buffer)
    }

    /// Send every drawable cell to the device and commit the frame.
    pub fn render_full(&mut self) -> Result<FrameReport> {
        let buffer = self.buffer.as_mut().ok_or(GridError::NotConfigured)?;
        self.renderer.render_full(buffer)
    }
}

// =============================================================================
// Tests
// =============================================================================
