//! Render configuration.

use crate::geometry::Interpolation;

/// Options for a [`RenderContext`](crate::RenderContext) and its devices.
///
/// # Example
///
/// ```
/// use cellgrid::{Interpolation, RenderConfig};
///
/// let config = RenderConfig::default()
///     .with_interpolation(Interpolation::Truncating)
///     .with_synchronized_output(false);
/// assert_eq!(config.interpolation, Interpolation::Truncating);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// How edge crossings are computed by the polygon selector.
    pub interpolation: Interpolation,
    /// Wrap each frame in synchronized-output escapes (mode 2026).
    pub synchronized_output: bool,
    /// Paint every cell when the grid is configured.
    pub initial_paint: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            interpolation: Interpolation::Exact,
            synchronized_output: true,
            initial_paint: true,
        }
    }
}

impl RenderConfig {
    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_synchronized_output(mut self, enabled: bool) -> Self {
        self.synchronized_output = enabled;
        self
    }

    pub fn with_initial_paint(mut self, enabled: bool) -> Self {
        self.initial_paint = enabled;
        self
    }
}
