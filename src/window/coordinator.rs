//! Overlay coordination.
//!
//! Builds the six pane windows for one render pass and enforces the
//! coverage invariant: on each axis the fixed panes exactly cover their
//! clamped sizes and the body window is disjoint from them, so no reachable
//! index is rendered by two panes. The corner pane intentionally repeats the
//! top/left windows (it is their intersection drawn as its own overlay) and
//! is excluded from the union check.

use super::calculator::{fixed_pane_range, scrollable_range, PaneRole};
use super::types::{
    Axis, AxisSource, FixedPaneSizes, GridDimensions, Overscan, PaneKind, RenderedRange,
    ScrollWindow,
};
use crate::error::{GridWinError, Result};

/// All pane windows for one render pass.
///
/// Pure function of its inputs: recomputed fresh every pass, never mutated
/// afterwards. Results handed to the render trigger are snapshots valid only
/// for the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySnapshot {
    dims: GridDimensions,
    top: RenderedRange,
    bottom: RenderedRange,
    left: RenderedRange,
    right: RenderedRange,
    body_rows: RenderedRange,
    body_columns: RenderedRange,
}

impl OverlaySnapshot {
    /// Compute all pane windows, failing on a coverage violation.
    ///
    /// # Errors
    /// Returns [`GridWinError::Coverage`] when the scroll window would make
    /// the body overlap a fixed pane, or when the top/bottom (left/right)
    /// fixed panes collide because the caller configured more fixed indices
    /// than the grid holds.
    pub fn compute(
        dims: GridDimensions,
        fixed: FixedPaneSizes,
        scroll: ScrollWindow,
        overscan: Overscan,
    ) -> Result<Self> {
        let snapshot = Self::build(dims, fixed, scroll, overscan);
        snapshot.verify_coverage(Axis::Row)?;
        snapshot.verify_coverage(Axis::Column)?;
        Ok(snapshot)
    }

    /// Compute all pane windows, downgrading coverage violations to a
    /// logged warning and auto-correcting.
    ///
    /// Fixed panes are authoritative: the body is re-clamped to start right
    /// after the last leading fixed index and stop before the first trailing
    /// fixed index. If the fixed panes themselves collide, the trailing pane
    /// renders nothing rather than overlapping content.
    pub fn compute_corrected(
        dims: GridDimensions,
        fixed: FixedPaneSizes,
        scroll: ScrollWindow,
        overscan: Overscan,
    ) -> Self {
        let mut snapshot = Self::build(dims, fixed, scroll, overscan);
        for axis in [Axis::Row, Axis::Column] {
            if let Err(violation) = snapshot.verify_coverage(axis) {
                log::warn!("{violation}; re-clamping body to follow fixed panes");
                snapshot.correct_axis(axis);
            }
        }
        snapshot
    }

    /// Window a pane renders on one axis.
    ///
    /// Panes fixed on one axis follow the body on the other: querying the
    /// top pane on the column axis returns the body's column window.
    #[must_use]
    pub fn rendered_range(&self, pane: PaneKind, axis: Axis) -> RenderedRange {
        match pane.source(axis) {
            AxisSource::FixedLeading => match axis {
                Axis::Row => self.top,
                Axis::Column => self.left,
            },
            AxisSource::FixedTrailing => match axis {
                Axis::Row => self.bottom,
                Axis::Column => self.right,
            },
            AxisSource::Scrollable => match axis {
                Axis::Row => self.body_rows,
                Axis::Column => self.body_columns,
            },
        }
    }

    /// Window a pane keeps inside the user's viewport on one axis
    /// (the rendered window minus overscan).
    #[must_use]
    pub fn visible_range(&self, pane: PaneKind, axis: Axis) -> RenderedRange {
        self.rendered_range(pane, axis).visible_only()
    }

    /// Grid dimensions this snapshot was computed for.
    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    fn build(
        dims: GridDimensions,
        fixed: FixedPaneSizes,
        scroll: ScrollWindow,
        overscan: Overscan,
    ) -> Self {
        // A grid empty on either axis has no cells; every pane renders nothing.
        if dims.is_empty() {
            return Self {
                dims,
                top: RenderedRange::EMPTY,
                bottom: RenderedRange::EMPTY,
                left: RenderedRange::EMPTY,
                right: RenderedRange::EMPTY,
                body_rows: RenderedRange::EMPTY,
                body_columns: RenderedRange::EMPTY,
            };
        }
        Self {
            dims,
            top: fixed_pane_range(dims.total_rows, fixed.fixed_rows_top, PaneRole::Leading),
            bottom: fixed_pane_range(dims.total_rows, fixed.fixed_rows_bottom, PaneRole::Trailing),
            left: fixed_pane_range(
                dims.total_columns,
                fixed.fixed_columns_left,
                PaneRole::Leading,
            ),
            right: fixed_pane_range(
                dims.total_columns,
                fixed.fixed_columns_right,
                PaneRole::Trailing,
            ),
            body_rows: scrollable_range(
                dims.total_rows,
                scroll.first_scrollable_row,
                scroll.viewport_row_capacity,
                overscan.rows,
            ),
            body_columns: scrollable_range(
                dims.total_columns,
                scroll.first_scrollable_column,
                scroll.viewport_column_capacity,
                overscan.columns,
            ),
        }
    }

    fn axis_windows(&self, axis: Axis) -> (RenderedRange, RenderedRange, RenderedRange) {
        match axis {
            Axis::Row => (self.top, self.bottom, self.body_rows),
            Axis::Column => (self.left, self.right, self.body_columns),
        }
    }

    fn verify_coverage(&self, axis: Axis) -> Result<()> {
        let (leading, trailing, body) = self.axis_windows(axis);
        let violation = |detail: String| GridWinError::Coverage { axis, detail };

        if !leading.is_empty()
            && !trailing.is_empty()
            && trailing.first_rendered <= leading.last_rendered
        {
            return Err(violation(format!(
                "fixed panes overlap: leading ends at {}, trailing starts at {}",
                leading.last_rendered, trailing.first_rendered
            )));
        }
        if !body.is_empty() && !leading.is_empty() && body.first_rendered <= leading.last_rendered
        {
            return Err(violation(format!(
                "body starts at {} inside the leading fixed pane ending at {}",
                body.first_rendered, leading.last_rendered
            )));
        }
        if !body.is_empty() && !trailing.is_empty() && body.last_rendered >= trailing.first_rendered
        {
            return Err(violation(format!(
                "body ends at {} inside the trailing fixed pane starting at {}",
                body.last_rendered, trailing.first_rendered
            )));
        }
        Ok(())
    }

    fn correct_axis(&mut self, axis: Axis) {
        let (leading, mut trailing, body) = self.axis_windows(axis);

        if !leading.is_empty()
            && !trailing.is_empty()
            && trailing.first_rendered <= leading.last_rendered
        {
            // Caller froze more indices than the grid holds; render the
            // leading pane and drop the trailing one (fail-safe-empty).
            trailing = RenderedRange::EMPTY;
        }

        let total = i64::from(self.dims.total(axis));
        let lo = if leading.is_empty() {
            0
        } else {
            leading.last_rendered + 1
        };
        let hi = if trailing.is_empty() {
            total - 1
        } else {
            trailing.first_rendered - 1
        };
        let body = body.clamped_to(lo, hi);

        match axis {
            Axis::Row => {
                self.bottom = trailing;
                self.body_rows = body;
            }
            Axis::Column => {
                self.right = trailing;
                self.body_columns = body;
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn scroll(first_row: u32, first_col: u32, rows: u32, cols: u32) -> ScrollWindow {
        ScrollWindow {
            first_scrollable_row: first_row,
            first_scrollable_column: first_col,
            viewport_row_capacity: rows,
            viewport_column_capacity: cols,
        }
    }

    #[test]
    fn test_disjoint_windows_pass_verification() {
        let snapshot = OverlaySnapshot::compute(
            GridDimensions::new(100, 50),
            FixedPaneSizes {
                fixed_rows_top: 2,
                fixed_rows_bottom: 2,
                fixed_columns_left: 1,
                fixed_columns_right: 0,
            },
            scroll(10, 5, 20, 10),
            Overscan::default(),
        )
        .unwrap();

        let body = snapshot.rendered_range(PaneKind::Body, Axis::Row);
        assert_eq!(body.first_rendered, 10);
        assert_eq!(body.last_rendered, 29);
    }

    #[test]
    fn test_body_overlapping_top_pane_is_a_violation() {
        let result = OverlaySnapshot::compute(
            GridDimensions::new(100, 50),
            FixedPaneSizes {
                fixed_rows_top: 5,
                ..FixedPaneSizes::default()
            },
            scroll(0, 0, 20, 10),
            Overscan::default(),
        );
        assert!(matches!(
            result,
            Err(GridWinError::Coverage {
                axis: Axis::Row,
                ..
            })
        ));
    }

    #[test]
    fn test_corrected_body_follows_fixed_panes() {
        let snapshot = OverlaySnapshot::compute_corrected(
            GridDimensions::new(100, 50),
            FixedPaneSizes {
                fixed_rows_top: 5,
                ..FixedPaneSizes::default()
            },
            scroll(0, 0, 20, 10),
            Overscan::default(),
        );
        let body = snapshot.rendered_range(PaneKind::Body, Axis::Row);
        assert_eq!(body.first_rendered, 5);
        assert_eq!(body.last_rendered, 19);
    }

    #[test]
    fn test_overscan_into_fixed_pane_is_corrected() {
        // Scroll is clear of the frozen rows but overscan dips into them.
        let snapshot = OverlaySnapshot::compute_corrected(
            GridDimensions::new(100, 50),
            FixedPaneSizes {
                fixed_rows_top: 3,
                ..FixedPaneSizes::default()
            },
            scroll(4, 0, 20, 10),
            Overscan { rows: 5, columns: 0 },
        );
        let body = snapshot.rendered_range(PaneKind::Body, Axis::Row);
        assert_eq!(body.first_rendered, 3);
        assert_eq!(body.first_visible, 4);
    }

    #[test]
    fn test_colliding_fixed_panes_empty_the_trailing_one() {
        // 7 + 7 frozen rows in a 10-row grid: bottom pane goes fail-safe-empty.
        let snapshot = OverlaySnapshot::compute_corrected(
            GridDimensions::new(10, 5),
            FixedPaneSizes {
                fixed_rows_top: 7,
                fixed_rows_bottom: 7,
                ..FixedPaneSizes::default()
            },
            scroll(7, 0, 20, 10),
            Overscan::default(),
        );
        assert!(snapshot.rendered_range(PaneKind::Bottom, Axis::Row).is_empty());
        let top = snapshot.rendered_range(PaneKind::Top, Axis::Row);
        assert_eq!((top.first_rendered, top.last_rendered), (0, 6));
        let body = snapshot.rendered_range(PaneKind::Body, Axis::Row);
        assert_eq!((body.first_rendered, body.last_rendered), (7, 9));
    }

    #[test]
    fn test_empty_grid_yields_sentinels_everywhere() {
        let snapshot = OverlaySnapshot::compute(
            GridDimensions::new(0, 50),
            FixedPaneSizes {
                fixed_rows_top: 2,
                ..FixedPaneSizes::default()
            },
            scroll(0, 0, 20, 10),
            Overscan::default(),
        )
        .unwrap();

        for pane in [
            PaneKind::Top,
            PaneKind::Bottom,
            PaneKind::Left,
            PaneKind::Right,
            PaneKind::Corner,
            PaneKind::Body,
        ] {
            for axis in [Axis::Row, Axis::Column] {
                let range = snapshot.rendered_range(pane, axis);
                assert_eq!(range.first_rendered, -1, "{pane:?} {axis:?}");
                assert_eq!(range.rendered_count(), 0, "{pane:?} {axis:?}");
            }
        }
    }

    #[test]
    fn test_corner_aliases_top_and_left() {
        let snapshot = OverlaySnapshot::compute(
            GridDimensions::new(100, 50),
            FixedPaneSizes {
                fixed_rows_top: 2,
                fixed_columns_left: 3,
                ..FixedPaneSizes::default()
            },
            scroll(10, 10, 20, 10),
            Overscan::default(),
        )
        .unwrap();

        assert_eq!(
            snapshot.rendered_range(PaneKind::Corner, Axis::Row),
            snapshot.rendered_range(PaneKind::Top, Axis::Row)
        );
        assert_eq!(
            snapshot.rendered_range(PaneKind::Corner, Axis::Column),
            snapshot.rendered_range(PaneKind::Left, Axis::Column)
        );
    }

    #[test]
    fn test_cross_axis_query_returns_body_window() {
        let snapshot = OverlaySnapshot::compute(
            GridDimensions::new(100, 50),
            FixedPaneSizes {
                fixed_rows_top: 2,
                ..FixedPaneSizes::default()
            },
            scroll(10, 10, 20, 10),
            Overscan::default(),
        )
        .unwrap();

        // The top overlay spans whatever columns the body renders.
        assert_eq!(
            snapshot.rendered_range(PaneKind::Top, Axis::Column),
            snapshot.rendered_range(PaneKind::Body, Axis::Column)
        );
    }
}
