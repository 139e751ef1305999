//! Error types for cellgrid.
//!
//! Every failure except [`GridError::TerminalQuery`] and [`GridError::Device`]
//! is a usage error: nothing else here is transient, so it is not worth
//! retrying.

use thiserror::Error;

/// Errors returned by grid, polygon and render operations.
#[derive(Debug, Error)]
pub enum GridError {
    /// The extent has a non-positive (or oversized) side.
    #[error("invalid extent {width}x{height}: width and height must be positive")]
    InvalidExtent { width: i32, height: i32 },

    /// A coordinate lies outside the configured grid.
    #[error("cell ({col}, {row}) is outside the {width}x{height} grid")]
    OutOfBounds {
        col: u16,
        row: u16,
        width: u16,
        height: u16,
    },

    /// A polygon needs at least three vertices.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// A buffer operation was attempted before `configure`.
    #[error("frame buffer has not been configured")]
    NotConfigured,

    /// The terminal could not report its size.
    #[error("failed to query terminal size: {0}")]
    TerminalQuery(#[source] std::io::Error),

    /// The output device rejected a frame batch.
    #[error("output device write failed: {0}")]
    Device(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
