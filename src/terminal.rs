//! Terminal session control.
//!
//! Bridges crossterm's terminal commands with the renderer: the grid is drawn
//! on the alternate screen with the cursor hidden, and both are restored when
//! the session ends.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use log::{debug, warn};
use std::io::{self, stdout};

use crate::error::{GridError, Result};
use crate::types::Extent;

/// Extent covering the whole terminal window.
pub fn terminal_extent() -> Result<Extent> {
    extent_from_size(terminal::size())
}

fn extent_from_size(size: io::Result<(u16, u16)>) -> Result<Extent> {
    let (cols, rows) = size.map_err(GridError::TerminalQuery)?;
    Ok(Extent::new(i32::from(cols), i32::from(rows)))
}

/// Guard that owns the alternate screen for its lifetime.
#[derive(Debug)]
pub struct TerminalSession {
    active: bool,
}

impl TerminalSession {
    /// Enter the alternate screen and hide the cursor.
    pub fn enter() -> io::Result<Self> {
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        debug!("entered alternate screen");
        Ok(Self { active: true })
    }

    /// Restore the main screen and cursor now instead of on drop.
    pub fn leave(mut self) -> io::Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(stdout(), Show, LeaveAlternateScreen)?;
        debug!("left alternate screen");
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!("failed to restore terminal: {}", err);
        }
    }
}
