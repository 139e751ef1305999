//! ANSI escape sequences used to encode render commands.
//!
//! - Cursor positioning (1-indexed on the wire, 0-indexed in the API)
//! - Palette foreground colors
//! - Attribute reset
//! - Synchronized output for flicker-free frames

use crate::types::Color;
use std::io::Write;

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Move cursor to absolute position. `col` and `row` are 0-indexed.
#[inline]
pub fn cursor_to<W: Write>(w: &mut W, col: u16, row: u16) -> std::io::Result<()> {
    write!(w, "{CSI}{};{}H", u32::from(row) + 1, u32::from(col) + 1)
}

/// Set foreground color. Writes nothing for [`Color::None`].
#[inline]
pub fn fg<W: Write>(w: &mut W, color: Color) -> std::io::Result<()> {
    match color.sgr_code() {
        Some(code) => write!(w, "{CSI}{}m", code),
        None => Ok(()),
    }
}

/// Reset all attributes and colors.
#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "{CSI}0m")
}

/// Begin synchronized output (terminal buffers until end_sync).
#[inline]
pub fn begin_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "{CSI}?2026h")
}

/// End synchronized output (terminal flushes buffer).
#[inline]
pub fn end_sync<W: Write>(w: &mut W) -> std::io::Result<()> {
    write!(w, "{CSI}?2026l")
}
