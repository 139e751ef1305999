//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer holds two index-aligned grids of Cells:
//! - `current` - what should be on screen; every drawing call writes here
//! - `previous` - what was last committed to the device
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing, `index = row * width + col`.
//! - **Checked access**: every coordinate accessor returns `Result` and never wraps.
//! - **Renderer-owned snapshot**: only [`FrameBuffer::commit`] writes `previous`.

use crate::error::{GridError, Result};
use crate::geometry::Polygon;
use crate::types::{Cell, CellChange, Color, Extent};

// =============================================================================
// FrameBuffer
// =============================================================================

/// A double-buffered grid of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    current: Vec<Cell>,
    previous: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a buffer of blank cells. `previous` starts equal to `current`.
    ///
    /// Cells are laid out row by row, columns inner.
    pub fn new(width: u16, height: u16) -> Self {
        let mut current = Vec::with_capacity(width as usize * height as usize);
        for row in 0..height {
            for col in 0..width {
                current.push(Cell::blank(row, col));
            }
        }
        let previous = current.clone();
        Self {
            width,
            height,
            current,
            previous,
        }
    }

    /// Create a buffer covering a validated extent.
    pub fn from_extent(extent: &Extent) -> Result<Self> {
        let (width, height) = extent.dimensions()?;
        Ok(Self::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of cells in each grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, col: u16, row: u16) -> bool {
        col < self.width && row < self.height
    }

    /// Convert `(col, row)` to a flat index, rejecting anything off-grid.
    #[inline]
    fn index(&self, col: u16, row: u16) -> Result<usize> {
        if self.in_bounds(col, row) {
            Ok(row as usize * self.width as usize + col as usize)
        } else {
            Err(GridError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            })
        }
    }

    // =========================================================================
    // Cell Access
    // =========================================================================

    pub fn cell(&self, col: u16, row: u16) -> Result<&Cell> {
        let idx = self.index(col, row)?;
        Ok(&self.current[idx])
    }

    /// Mutable access into `current`; writes are seen by the next render.
    pub fn cell_mut(&mut self, col: u16, row: u16) -> Result<&mut Cell> {
        let idx = self.index(col, row)?;
        Ok(&mut self.current[idx])
    }

    pub fn color_of(&self, col: u16, row: u16) -> Result<Color> {
        self.cell(col, row).map(|cell| cell.color)
    }

    pub fn set_color(&mut self, col: u16, row: u16, color: Color) -> Result<()> {
        self.cell_mut(col, row)?.color = color;
        Ok(())
    }

    pub fn glyph_of(&self, col: u16, row: u16) -> Result<char> {
        self.cell(col, row).map(|cell| cell.glyph)
    }

    pub fn set_glyph(&mut self, col: u16, row: u16, glyph: char) -> Result<()> {
        self.cell_mut(col, row)?.glyph = glyph;
        Ok(())
    }

    /// Reset one cell to `None` and the placeholder glyph.
    pub fn clear_cell(&mut self, col: u16, row: u16) -> Result<()> {
        self.cell_mut(col, row)?.clear();
        Ok(())
    }

    /// The authoritative grid.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// The last committed grid.
    #[inline]
    pub fn previous(&self) -> &[Cell] {
        &self.previous
    }

    /// Iterate over current cells with their coordinates, as `(col, row, cell)`.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, &Cell)> {
        self.current.iter().map(|cell| (cell.col, cell.row, cell))
    }

    // =========================================================================
    // Polygon Selection & Fill
    // =========================================================================

    /// Borrow every current cell inside `polygon`, in row-major order.
    ///
    /// The references alias the buffer: writing through them is a draw.
    pub fn select_mut(&mut self, polygon: &Polygon<'_>) -> Vec<&mut Cell> {
        self.current
            .iter_mut()
            .filter(|cell| polygon.contains(i32::from(cell.col), i32::from(cell.row)))
            .collect()
    }

    /// Paint every cell inside `polygon`. Returns how many cells were hit.
    pub fn fill_polygon(&mut self, polygon: &Polygon<'_>, color: Color, glyph: char) -> usize {
        let selected = self.select_mut(polygon);
        let count = selected.len();
        for cell in selected {
            cell.paint(color, glyph);
        }
        count
    }

    // =========================================================================
    // Diff Support
    // =========================================================================

    /// Cells whose color or glyph differ from the committed snapshot.
    pub fn changes(&self) -> impl Iterator<Item = (CellChange, &Cell)> {
        self.current
            .iter()
            .zip(&self.previous)
            .map(|(cur, prev)| (cur.diff(prev), cur))
            .filter(|(change, _)| !change.is_empty())
    }

    /// Snapshot `current` into `previous`.
    pub fn commit(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// Check if anything changed since the last commit.
    pub fn is_dirty(&self) -> bool {
        self.changes().next().is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================
