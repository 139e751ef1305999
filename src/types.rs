//! Core types for cellgrid.
//!
//! These types are shared by the frame buffer, the polygon selector and the
//! renderer:
//! - [`Color`] - the closed terminal palette plus the `None` sentinel
//! - [`Cell`] - one addressable unit of the grid
//! - [`Point`] - a polygon vertex in cell coordinates
//! - [`Extent`] - the drawable rectangle

use crate::error::{GridError, Result};

/// Glyph a cell holds after it is cleared.
pub const PLACEHOLDER_GLYPH: char = '-';

// =============================================================================
// Color - Fixed terminal palette
// =============================================================================

/// Terminal color of a cell.
///
/// The discriminants are the SGR foreground codes. `None` is a sentinel that
/// marks a cell as "not drawn": the renderer never sends it to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    None = 99,
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

impl Color {
    /// The eight drawable colors, in SGR order.
    pub const DRAWABLE: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// SGR foreground code, or `None` for the sentinel.
    #[inline]
    pub fn sgr_code(self) -> Option<u8> {
        match self {
            Color::None => None,
            other => Some(other as u8),
        }
    }

    /// Check if this color is rendered at all.
    #[inline]
    pub fn is_drawable(self) -> bool {
        self != Color::None
    }
}

// =============================================================================
// Cell Changes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Which fields of a cell differ between two frames.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellChange: u8 {
        const NONE = 0;
        const COLOR = 1 << 0;
        const GLYPH = 1 << 1;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single grid cell.
///
/// `row` and `col` are fixed at allocation; only `color` and `glyph` change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u16,
    pub col: u16,
    pub color: Color,
    pub glyph: char,
}

impl Cell {
    /// Create a cleared cell at the given position.
    pub const fn blank(row: u16, col: u16) -> Self {
        Self {
            row,
            col,
            color: Color::None,
            glyph: PLACEHOLDER_GLYPH,
        }
    }

    /// Reset color to `None` and glyph to the placeholder.
    #[inline]
    pub fn clear(&mut self) {
        self.color = Color::None;
        self.glyph = PLACEHOLDER_GLYPH;
    }

    /// Set color and glyph together.
    #[inline]
    pub fn paint(&mut self, color: Color, glyph: char) {
        self.color = color;
        self.glyph = glyph;
    }

    /// Compare color and glyph against another cell. Position is ignored.
    #[inline]
    pub fn diff(&self, other: &Cell) -> CellChange {
        let mut change = CellChange::NONE;
        if self.color != other.color {
            change |= CellChange::COLOR;
        }
        if self.glyph != other.glyph {
            change |= CellChange::GLYPH;
        }
        change
    }

    #[inline]
    pub fn differs_from(&self, other: &Cell) -> bool {
        !self.diff(other).is_empty()
    }
}

// =============================================================================
// Point
// =============================================================================

/// A polygon vertex. `x` is the column, `y` is the row.
///
/// Vertices may lie outside the grid; only cells are bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

// =============================================================================
// Extent - Drawable rectangle
// =============================================================================

/// The rectangle a frame buffer covers, given as four corners.
///
/// Only two corners carry information: the width is `corners[1].x` and the
/// height is `corners[3].y`. [`Extent::new`] builds the canonical corner set
/// `(0,0) (w,0) (w,h) (0,h)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub corners: [Point; 4],
}

impl Extent {
    /// Create an extent from a width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            corners: [
                Point::new(0, 0),
                Point::new(width, 0),
                Point::new(width, height),
                Point::new(0, height),
            ],
        }
    }

    /// Create an extent from explicit corners.
    pub const fn from_corners(corners: [Point; 4]) -> Self {
        Self { corners }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.corners[1].x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.corners[3].y
    }

    /// Validate and convert to cell dimensions.
    ///
    /// Both sides must be positive and fit in `u16`.
    pub fn dimensions(&self) -> Result<(u16, u16)> {
        let (width, height) = (self.width(), self.height());
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(GridError::InvalidExtent { width, height }),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
