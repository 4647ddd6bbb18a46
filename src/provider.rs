//! Dimension and scroll-state adapters.
//!
//! The engine consumes two host-side collaborators: a dimension provider
//! (total counts and fixed-pane sizes) and a scroll state (first scrollable
//! index and viewport capacity per axis, already translated from pixels by
//! the host). Both report raw `i64` values; the adapters here validate them
//! into the typed snapshots the calculators work over, so a negative count
//! surfaces as [`GridWinError::InvalidConfiguration`] at the boundary and
//! everything downstream is infallible.

use crate::error::{GridWinError, Result};
use crate::window::{
    FixedPaneSizes, GridDimensions, OverlaySnapshot, Overscan, ScrollWindow,
};

/// Supplies total grid dimensions and fixed-pane sizes.
///
/// Read-only within a render pass; mutation happens strictly between passes.
pub trait DimensionProvider {
    /// Total number of data rows
    fn total_rows(&self) -> i64;
    /// Total number of data columns
    fn total_columns(&self) -> i64;
    /// Number of frozen rows at the top edge
    fn fixed_rows_top(&self) -> i64;
    /// Number of frozen rows at the bottom edge
    fn fixed_rows_bottom(&self) -> i64;
    /// Number of frozen columns at the left edge
    fn fixed_columns_left(&self) -> i64;
    /// Number of frozen columns at the right edge; most hosts have none
    fn fixed_columns_right(&self) -> i64 {
        0
    }
}

/// Supplies the current scroll position in index units.
pub trait ScrollState {
    /// First row the scrollable body should start rendering from
    fn first_scrollable_row(&self) -> i64;
    /// First column the scrollable body should start rendering from
    fn first_scrollable_column(&self) -> i64;
    /// How many rows fit in the visible viewport height
    fn viewport_row_capacity(&self) -> i64;
    /// How many columns fit in the visible viewport width
    fn viewport_column_capacity(&self) -> i64;
}

fn checked_count(setting: &str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| {
        GridWinError::InvalidConfiguration(format!(
            "{setting} must be a non-negative integer within u32 range, got {value}"
        ))
    })
}

impl GridDimensions {
    /// Snapshot the provider's totals, validating them.
    ///
    /// # Errors
    /// [`GridWinError::InvalidConfiguration`] when a total is negative or
    /// exceeds `u32::MAX`.
    pub fn from_provider(provider: &dyn DimensionProvider) -> Result<Self> {
        Ok(Self {
            total_rows: checked_count("totalRows", provider.total_rows())?,
            total_columns: checked_count("totalColumns", provider.total_columns())?,
        })
    }
}

impl FixedPaneSizes {
    /// Snapshot the provider's fixed-pane sizes, validating them.
    ///
    /// # Errors
    /// [`GridWinError::InvalidConfiguration`] when a size is negative or
    /// exceeds `u32::MAX`.
    pub fn from_provider(provider: &dyn DimensionProvider) -> Result<Self> {
        Ok(Self {
            fixed_rows_top: checked_count("fixedRowsTop", provider.fixed_rows_top())?,
            fixed_rows_bottom: checked_count("fixedRowsBottom", provider.fixed_rows_bottom())?,
            fixed_columns_left: checked_count("fixedColumnsLeft", provider.fixed_columns_left())?,
            fixed_columns_right: checked_count(
                "fixedColumnsRight",
                provider.fixed_columns_right(),
            )?,
        })
    }
}

impl ScrollWindow {
    /// Snapshot the scroll state, validating it.
    ///
    /// # Errors
    /// [`GridWinError::InvalidConfiguration`] when an offset or capacity is
    /// negative or exceeds `u32::MAX`.
    pub fn from_scroll_state(scroll: &dyn ScrollState) -> Result<Self> {
        Ok(Self {
            first_scrollable_row: checked_count(
                "firstScrollableRow",
                scroll.first_scrollable_row(),
            )?,
            first_scrollable_column: checked_count(
                "firstScrollableColumn",
                scroll.first_scrollable_column(),
            )?,
            viewport_row_capacity: checked_count(
                "viewportRowCapacity",
                scroll.viewport_row_capacity(),
            )?,
            viewport_column_capacity: checked_count(
                "viewportColumnCapacity",
                scroll.viewport_column_capacity(),
            )?,
        })
    }
}

/// Snapshot both collaborators and compute the pane windows in one call,
/// using the correcting (warn-and-clamp) coverage path.
///
/// # Errors
/// [`GridWinError::InvalidConfiguration`] when either collaborator reports
/// a negative or out-of-range value.
pub fn snapshot_from_providers(
    provider: &dyn DimensionProvider,
    scroll: &dyn ScrollState,
    overscan: Overscan,
) -> Result<OverlaySnapshot> {
    let dims = GridDimensions::from_provider(provider)?;
    let fixed = FixedPaneSizes::from_provider(provider)?;
    let window = ScrollWindow::from_scroll_state(scroll)?;
    Ok(OverlaySnapshot::compute_corrected(
        dims, fixed, window, overscan,
    ))
}

/// Plain-struct dimension provider for hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDimensions {
    pub total_rows: i64,
    pub total_columns: i64,
    pub fixed_rows_top: i64,
    pub fixed_rows_bottom: i64,
    pub fixed_columns_left: i64,
    pub fixed_columns_right: i64,
}

impl DimensionProvider for StaticDimensions {
    fn total_rows(&self) -> i64 {
        self.total_rows
    }
    fn total_columns(&self) -> i64 {
        self.total_columns
    }
    fn fixed_rows_top(&self) -> i64 {
        self.fixed_rows_top
    }
    fn fixed_rows_bottom(&self) -> i64 {
        self.fixed_rows_bottom
    }
    fn fixed_columns_left(&self) -> i64 {
        self.fixed_columns_left
    }
    fn fixed_columns_right(&self) -> i64 {
        self.fixed_columns_right
    }
}

/// Plain-struct scroll state for hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticScroll {
    pub first_scrollable_row: i64,
    pub first_scrollable_column: i64,
    pub viewport_row_capacity: i64,
    pub viewport_column_capacity: i64,
}

impl ScrollState for StaticScroll {
    fn first_scrollable_row(&self) -> i64 {
        self.first_scrollable_row
    }
    fn first_scrollable_column(&self) -> i64 {
        self.first_scrollable_column
    }
    fn viewport_row_capacity(&self) -> i64 {
        self.viewport_row_capacity
    }
    fn viewport_column_capacity(&self) -> i64 {
        self.viewport_column_capacity
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_provider_snapshots() {
        let provider = StaticDimensions {
            total_rows: 100,
            total_columns: 50,
            fixed_rows_top: 2,
            ..StaticDimensions::default()
        };
        let dims = GridDimensions::from_provider(&provider).unwrap();
        assert_eq!(dims.total_rows, 100);
        let fixed = FixedPaneSizes::from_provider(&provider).unwrap();
        assert_eq!(fixed.fixed_rows_top, 2);
        assert_eq!(fixed.fixed_columns_right, 0);
    }

    #[test]
    fn test_negative_total_is_invalid_configuration() {
        let provider = StaticDimensions {
            total_rows: -1,
            ..StaticDimensions::default()
        };
        let err = GridDimensions::from_provider(&provider).unwrap_err();
        assert!(matches!(err, GridWinError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("totalRows"));
    }

    #[test]
    fn test_negative_capacity_is_invalid_configuration() {
        let scroll = StaticScroll {
            viewport_row_capacity: -20,
            ..StaticScroll::default()
        };
        let err = ScrollWindow::from_scroll_state(&scroll).unwrap_err();
        assert!(err.to_string().contains("viewportRowCapacity"));
    }

    #[test]
    fn test_snapshot_from_providers_end_to_end() {
        let provider = StaticDimensions {
            total_rows: 100,
            total_columns: 50,
            fixed_rows_top: 3,
            ..StaticDimensions::default()
        };
        let scroll = StaticScroll {
            first_scrollable_row: 50,
            first_scrollable_column: 0,
            viewport_row_capacity: 20,
            viewport_column_capacity: 10,
        };
        let snapshot =
            snapshot_from_providers(&provider, &scroll, Overscan::default()).unwrap();
        let body = snapshot.rendered_range(crate::window::PaneKind::Body, crate::window::Axis::Row);
        assert_eq!((body.first_rendered, body.last_rendered), (50, 69));
    }
}
