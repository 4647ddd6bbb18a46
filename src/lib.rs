//! gridwin - viewport windowing engine for very large grids
//!
//! Computes, for each overlay pane of a grid (frozen rows/columns and the
//! scrollable body), the exact range of row/column indices to render:
//! - Six pane kinds: top, bottom, left, right, corner, body
//! - Rendered vs. visible ranges, with configurable overscan
//! - Coverage invariant: every reachable index rendered by exactly one pane
//! - Rendering cost proportional to viewport size, not data size
//!
//! # Usage
//!
//! ```
//! use gridwin::{
//!     Axis, FixedPaneSizes, GridDimensions, OverlaySnapshot, Overscan, PaneKind, ScrollWindow,
//! };
//!
//! # fn main() -> gridwin::Result<()> {
//! let dims = GridDimensions::new(1_000_000, 200);
//! let fixed = FixedPaneSizes {
//!     fixed_rows_top: 1,
//!     ..FixedPaneSizes::default()
//! };
//! let scroll = ScrollWindow {
//!     first_scrollable_row: 500,
//!     first_scrollable_column: 4,
//!     viewport_row_capacity: 40,
//!     viewport_column_capacity: 12,
//! };
//!
//! let snapshot = OverlaySnapshot::compute(dims, fixed, scroll, Overscan::default())?;
//! let body = snapshot.rendered_range(PaneKind::Body, Axis::Row);
//! assert_eq!((body.first_rendered, body.last_rendered), (500, 539));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter_values;
pub mod provider;
pub mod window;

pub use error::{GridWinError, Result};
pub use provider::{snapshot_from_providers, DimensionProvider, ScrollState};
pub use window::{
    Axis, FixedPaneSizes, GridDimensions, OverlaySnapshot, Overscan, PaneKind, RenderedRange,
    ScrollWindow,
};

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
