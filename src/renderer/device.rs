//! The output device seam.
//!
//! The renderer never writes bytes itself. It hands each frame to an
//! [`OutputDevice`] as one batch of [`RenderCommand`]s and waits for the call
//! to return before committing the frame.

use std::io;

use crate::types::{Cell, Color};

/// Move to `(row, col)`, set `color`, draw `glyph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCommand {
    pub row: u16,
    pub col: u16,
    pub color: Color,
    pub glyph: char,
}

impl From<&Cell> for RenderCommand {
    fn from(cell: &Cell) -> Self {
        Self {
            row: cell.row,
            col: cell.col,
            color: cell.color,
            glyph: cell.glyph,
        }
    }
}

/// Something that can display render commands.
///
/// `draw` receives every command of one frame at once. Commands never carry
/// [`Color::None`]. An empty batch is still delivered so devices can observe
/// frame boundaries.
pub trait OutputDevice {
    fn draw(&mut self, commands: &[RenderCommand]) -> io::Result<()>;
}

/// Recording device: appends every command it receives.
impl OutputDevice for Vec<RenderCommand> {
    fn draw(&mut self, commands: &[RenderCommand]) -> io::Result<()> {
        self.extend_from_slice(commands);
        Ok(())
    }
}

impl<D: OutputDevice + ?Sized> OutputDevice for &mut D {
    fn draw(&mut self, commands: &[RenderCommand]) -> io::Result<()> {
        (**self).draw(commands)
    }
}

impl<D: OutputDevice + ?Sized> OutputDevice for Box<D> {
    fn draw(&mut self, commands: &[RenderCommand]) -> io::Result<()> {
        (**self).draw(commands)
    }
}
