//! Output buffering and the ANSI terminal device.
//!
//! These components keep terminal I/O cheap by:
//! - Batching a whole frame into a single write
//! - Skipping cursor moves when the terminal cursor already sits on the cell

use std::io::{self, Write};

use unicode_width::UnicodeWidthChar;

use super::ansi;
use super::device::{OutputDevice, RenderCommand};
use crate::config::RenderConfig;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates output for batch writing.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Write everything to `writer` in one call and empty the buffer.
    pub fn flush_to<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        if self.data.is_empty() {
            return Ok(());
        }
        writer.write_all(&self.data)?;
        self.data.clear();
        Ok(())
    }

    /// Get the accumulated data as a string (lossy).
    pub fn as_str(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }
}

impl Write for OutputBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(()) // Buffering only - real flush via flush_to
    }
}

// =============================================================================
// AnsiDevice
// =============================================================================

/// Output device that encodes commands as ANSI escapes for a terminal.
///
/// Each command becomes `cursor move, color, glyph, reset`. The cursor move is
/// dropped when the previous glyph's display width left the terminal cursor
/// exactly on this command's cell. Zero-width and control glyphs always force
/// a move for the next command.
#[derive(Debug)]
pub struct AnsiDevice<W: Write> {
    writer: W,
    output: OutputBuffer,
    synchronized: bool,
}

impl AnsiDevice<io::Stdout> {
    /// Device writing to the process's stdout.
    pub fn stdout(config: &RenderConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> AnsiDevice<W> {
    pub fn new(writer: W, config: &RenderConfig) -> Self {
        Self {
            writer,
            output: OutputBuffer::new(),
            synchronized: config.synchronized_output,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Encode one batch into the output buffer.
    fn encode(&mut self, commands: &[RenderCommand]) -> io::Result<()> {
        let out = &mut self.output;
        // Where the terminal cursor is known to be, as (row, col)
        let mut cursor: Option<(u16, u16)> = None;

        if self.synchronized {
            ansi::begin_sync(out)?;
        }

        for cmd in commands {
            if !cmd.color.is_drawable() {
                continue;
            }
            if cursor != Some((cmd.row, cmd.col)) {
                ansi::cursor_to(out, cmd.col, cmd.row)?;
            }
            ansi::fg(out, cmd.color)?;
            out.write_char(cmd.glyph);
            ansi::reset(out)?;
            cursor = advance(cmd.row, cmd.col, cmd.glyph);
        }

        if self.synchronized {
            ansi::end_sync(out)?;
        }
        Ok(())
    }
}

/// Cursor position after drawing `glyph` at `(row, col)`, if predictable.
fn advance(row: u16, col: u16, glyph: char) -> Option<(u16, u16)> {
    match glyph.width() {
        Some(width) if width > 0 => {
            let width = u16::try_from(width).ok()?;
            col.checked_add(width).map(|next| (row, next))
        }
        _ => None,
    }
}

impl<W: Write> OutputDevice for AnsiDevice<W> {
    fn draw(&mut self, commands: &[RenderCommand]) -> io::Result<()> {
        if commands.is_empty() {
            return Ok(());
        }
        self.output.clear();
        self.encode(commands)?;
        self.output.flush_to(&mut self.writer)?;
        self.writer.flush()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn cmd(col: u16, row: u16, color: Color, glyph: char) -> RenderCommand {
        RenderCommand {
            row,
            col,
            color,
            glyph,
        }
    }

    fn plain() -> RenderConfig {
        RenderConfig::default().with_synchronized_output(false)
    }

    #[test]
    fn test_output_buffer_write() {
        let mut buf = OutputBuffer::new();
        buf.write_char('h');
        write!(buf, "ello").unwrap();
        buf.write_char('é');
        assert_eq!(buf.as_str().as_ref(), "helloé");
        assert_eq!(buf.len(), 7);

        let mut sink = Vec::new();
        buf.flush_to(&mut sink).unwrap();
        assert!(buf.is_empty());
        assert_eq!(sink, "helloé".as_bytes());
    }

    #[test]
    fn test_single_command_encoding() {
        let mut device = AnsiDevice::new(Vec::new(), &plain());
        device.draw(&[cmd(2, 1, Color::Red, 'X')]).unwrap();
        assert_eq!(device.writer().as_slice(), b"\x1b[2;3H\x1b[31mX\x1b[0m");
    }

    #[test]
    fn test_adjacent_cells_skip_cursor_move() {
        let mut device = AnsiDevice::new(Vec::new(), &plain());
        device
            .draw(&[
                cmd(0, 0, Color::Blue, 'a'),
                cmd(1, 0, Color::Blue, 'b'),
                cmd(0, 1, Color::Green, 'c'),
            ])
            .unwrap();
        let out = String::from_utf8(device.into_inner()).unwrap();
        assert_eq!(
            out,
            "\x1b[1;1H\x1b[34ma\x1b[0m\x1b[34mb\x1b[0m\x1b[2;1H\x1b[32mc\x1b[0m"
        );
    }

    #[test]
    fn test_wide_glyph_forces_cursor_move() {
        let mut device = AnsiDevice::new(Vec::new(), &plain());
        device
            .draw(&[cmd(0, 0, Color::Red, '字'), cmd(1, 0, Color::Red, 'b')])
            .unwrap();
        let out = String::from_utf8(device.into_inner()).unwrap();
        assert_eq!(
            out,
            "\x1b[1;1H\x1b[31m字\x1b[0m\x1b[1;2H\x1b[31mb\x1b[0m"
        );
    }

    #[test]
    fn test_wide_glyph_advances_two_columns() {
        let mut device = AnsiDevice::new(Vec::new(), &plain());
        device
            .draw(&[cmd(0, 0, Color::Red, '字'), cmd(2, 0, Color::Red, 'b')])
            .unwrap();
        let out = String::from_utf8(device.into_inner()).unwrap();
        assert_eq!(out, "\x1b[1;1H\x1b[31m字\x1b[0m\x1b[31mb\x1b[0m");
    }

    #[test]
    fn test_zero_width_glyph_forces_cursor_move() {
        let mut device = AnsiDevice::new(Vec::new(), &plain());
        device
            .draw(&[cmd(0, 0, Color::Blue, '\u{301}'), cmd(1, 0, Color::Blue, 'x')])
            .unwrap();
        let out = String::from_utf8(device.into_inner()).unwrap();
        assert_eq!(
            out,
            "\x1b[1;1H\x1b[34m\u{301}\x1b[0m\x1b[1;2H\x1b[34mx\x1b[0m"
        );
    }

    #[test]
    fn test_none_color_never_encoded() {
        let mut device = AnsiDevice::new(Vec::new(), &plain());
        device.draw(&[cmd(0, 0, Color::None, 'z')]).unwrap();
        assert!(device.writer().is_empty());
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let mut device = AnsiDevice::new(Vec::new(), &RenderConfig::default());
        device.draw(&[]).unwrap();
        assert!(device.writer().is_empty());
    }

    #[test]
    fn test_synchronized_frame() {
        let mut device = AnsiDevice::new(Vec::new(), &RenderConfig::default());
        device.draw(&[cmd(0, 0, Color::White, '#')]).unwrap();
        let out = String::from_utf8(device.into_inner()).unwrap();
        assert!(out.starts_with("\x1b[?2026h"));
        assert!(out.ends_with("\x1b[?2026l"));
    }
}
