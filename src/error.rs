//! Structured error types for gridwin.

use crate::window::Axis;

/// All errors the windowing engine can signal.
///
/// An empty grid is not an error: zero totals produce `-1` sentinels and
/// empty panes on the normal path.
#[derive(Debug, thiserror::Error)]
pub enum GridWinError {
    /// A collaborator supplied a negative or out-of-range count/capacity.
    /// Not retried; this indicates an upstream bug in the dimension
    /// provider or scroll state.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Computed pane windows failed the per-axis coverage invariant.
    /// Recoverable: `OverlaySnapshot::compute_corrected` re-clamps the body
    /// to follow the fixed panes and proceeds with a logged warning.
    #[error("coverage violation on {axis:?} axis: {detail}")]
    Coverage {
        /// Axis the violation occurred on
        axis: Axis,
        /// Which windows collided and where
        detail: String,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridWinError>;
