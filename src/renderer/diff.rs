//! Differential renderer.
//!
//! The DiffRenderer compares `current` against the committed `previous` grid
//! and sends only cells that changed.
//!
//! # Algorithm
//!
//! 1. Collect every changed cell whose color is drawable into one batch
//! 2. Hand the batch to the device and wait for it
//! 3. Copy `current` into `previous`
//!
//! A device error skips step 3, so the same cells are retried next frame.
//!
//! Cells that changed *to* [`Color::None`] count as synced but are never
//! sent. The device keeps showing whatever it drew there last.

use log::{trace, warn};

use super::buffer::FrameBuffer;
use super::device::{OutputDevice, RenderCommand};
use crate::error::Result;
use crate::types::{CellChange, Color};

/// What one render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Cells considered for output (changed cells, or all cells on a full render).
    pub synced: usize,
    /// Commands actually sent to the device.
    pub emitted: usize,
    /// Synced cells whose color changed.
    pub recolored: usize,
}

impl FrameReport {
    /// Synced cells that were withheld because their color is `None`.
    #[inline]
    pub fn hidden(&self) -> usize {
        self.synced - self.emitted
    }
}

/// Differential renderer over an [`OutputDevice`].
pub struct DiffRenderer<D: OutputDevice> {
    device: D,
    batch: Vec<RenderCommand>,
}

impl<D: OutputDevice> DiffRenderer<D> {
    pub fn new(device: D) -> Self {
        Self {
            device,
            batch: Vec::new(),
        }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }

    /// Render a frame, sending only changed cells.
    pub fn render(&mut self, buffer: &mut FrameBuffer) -> Result<FrameReport> {
        let mut report = FrameReport::default();
        self.batch.clear();

        for (change, cell) in buffer.changes() {
            report.synced += 1;
            if change.contains(CellChange::COLOR) {
                report.recolored += 1;
            }
            if cell.color != Color::None {
                self.batch.push(RenderCommand::from(cell));
            }
        }

        self.flush(buffer, report)
    }

    /// Send every drawable cell regardless of the diff.
    ///
    /// Use this for the first paint or when the screen is corrupted.
    pub fn render_full(&mut self, buffer: &mut FrameBuffer) -> Result<FrameReport> {
        let mut report = FrameReport::default();
        self.batch.clear();

        for (cur, prev) in buffer.cells().iter().zip(buffer.previous()) {
            report.synced += 1;
            if cur.diff(prev).contains(CellChange::COLOR) {
                report.recolored += 1;
            }
            if cur.color != Color::None {
                self.batch.push(RenderCommand::from(cur));
            }
        }

        self.flush(buffer, report)
    }

    fn flush(&mut self, buffer: &mut FrameBuffer, mut report: FrameReport) -> Result<FrameReport> {
        report.emitted = self.batch.len();

        if let Err(err) = self.device.draw(&self.batch) {
            warn!(
                "device rejected frame of {} commands, keeping previous snapshot: {}",
                report.emitted, err
            );
            return Err(err.into());
        }

        buffer.commit();
        trace!(
            "frame: synced={} emitted={} recolored={}",
            report.synced, report.emitted, report.recolored
        );
        Ok(report)
    }
}

// =============================================================================
// Tests
// =============================================================================
