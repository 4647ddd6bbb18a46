//! Data model for the windowing engine.
//!
//! All types here are per-render-pass snapshots: computed fresh from the
//! dimension provider and scroll state, never retained across passes.

use serde::{Deserialize, Serialize};

/// Sentinel index meaning "nothing to render" (empty pane or empty grid).
pub const NO_INDEX: i64 = -1;

/// Total grid dimensions for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridDimensions {
    /// Total number of data rows
    pub total_rows: u32,
    /// Total number of data columns
    pub total_columns: u32,
}

impl GridDimensions {
    /// Create dimensions for a grid of `total_rows` x `total_columns`.
    #[must_use]
    pub fn new(total_rows: u32, total_columns: u32) -> Self {
        Self {
            total_rows,
            total_columns,
        }
    }

    /// Total count along one axis.
    #[must_use]
    pub fn total(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.total_rows,
            Axis::Column => self.total_columns,
        }
    }

    /// True when the grid has no cells at all (zero rows or zero columns).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_rows == 0 || self.total_columns == 0
    }
}

/// Configured sizes of the frozen panes.
///
/// `fixed_rows_top + fixed_rows_bottom <= total_rows` is the caller's
/// responsibility; the calculators clamp against totals regardless, and the
/// coordinator empties the trailing pane if the two ever collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPaneSizes {
    /// Number of frozen rows pinned to the top edge
    pub fixed_rows_top: u32,
    /// Number of frozen rows pinned to the bottom edge
    pub fixed_rows_bottom: u32,
    /// Number of frozen columns pinned to the left edge
    pub fixed_columns_left: u32,
    /// Number of frozen columns pinned to the right edge (0 = none)
    pub fixed_columns_right: u32,
}

impl FixedPaneSizes {
    /// Size of the leading frozen pane on one axis (top rows / left columns).
    #[must_use]
    pub fn leading(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.fixed_rows_top,
            Axis::Column => self.fixed_columns_left,
        }
    }

    /// Size of the trailing frozen pane on one axis (bottom rows / right columns).
    #[must_use]
    pub fn trailing(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.fixed_rows_bottom,
            Axis::Column => self.fixed_columns_right,
        }
    }
}

/// Scroll-state snapshot for one render pass.
///
/// `first_scrollable_*` is already translated from pixels to an index by the
/// host; `viewport_*_capacity` is how many indices fit the visible pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollWindow {
    /// First row the scrollable body starts rendering from
    pub first_scrollable_row: u32,
    /// First column the scrollable body starts rendering from
    pub first_scrollable_column: u32,
    /// How many rows fit in the visible viewport height
    pub viewport_row_capacity: u32,
    /// How many columns fit in the visible viewport width
    pub viewport_column_capacity: u32,
}

impl ScrollWindow {
    /// First scrollable index along one axis.
    #[must_use]
    pub fn first_scrollable(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.first_scrollable_row,
            Axis::Column => self.first_scrollable_column,
        }
    }

    /// Viewport capacity along one axis.
    #[must_use]
    pub fn capacity(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.viewport_row_capacity,
            Axis::Column => self.viewport_column_capacity,
        }
    }
}

/// Extra indices rendered beyond the visible range, absorbing scroll
/// movement without an immediate re-render. Defaults to zero on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overscan {
    /// Extra rows rendered above and below the visible window
    pub rows: u32,
    /// Extra columns rendered left and right of the visible window
    pub columns: u32,
}

impl Overscan {
    /// Overscan along one axis.
    #[must_use]
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.columns,
        }
    }
}

/// One pane's render window on one axis.
///
/// `first_rendered..=last_rendered` is the interval materialized in the
/// output; `first_visible..=last_visible` is the sub-interval inside the
/// user's viewport (identical for fixed panes, narrower than rendered for
/// the body when overscan is configured). `-1` means "nothing to render".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedRange {
    /// Source index of the first rendered row/column, or -1
    pub first_rendered: i64,
    /// Source index of the last rendered row/column, or -1
    pub last_rendered: i64,
    /// Source index of the first visible row/column, or -1
    pub first_visible: i64,
    /// Source index of the last visible row/column, or -1
    pub last_visible: i64,
}

impl RenderedRange {
    /// Range that renders nothing (all sentinels).
    pub const EMPTY: Self = Self {
        first_rendered: NO_INDEX,
        last_rendered: NO_INDEX,
        first_visible: NO_INDEX,
        last_visible: NO_INDEX,
    };

    /// Range where the whole rendered interval is visible (fixed panes).
    #[must_use]
    pub fn fully_visible(first: i64, last: i64) -> Self {
        Self {
            first_rendered: first,
            last_rendered: last,
            first_visible: first,
            last_visible: last,
        }
    }

    /// True when this pane renders nothing on this axis.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_rendered < 0 || self.last_rendered < self.first_rendered
    }

    /// Number of rendered indices. Never negative; zero for empty ranges.
    #[must_use]
    pub fn rendered_count(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }
        u32::try_from(self.last_rendered - self.first_rendered + 1).unwrap_or(0)
    }

    /// Number of visible indices. Never negative; zero for empty ranges.
    #[must_use]
    pub fn visible_count(&self) -> u32 {
        if self.first_visible < 0 || self.last_visible < self.first_visible {
            return 0;
        }
        u32::try_from(self.last_visible - self.first_visible + 1).unwrap_or(0)
    }

    /// The visible sub-interval as a standalone range (no overscan).
    #[must_use]
    pub fn visible_only(&self) -> Self {
        if self.first_visible < 0 || self.last_visible < self.first_visible {
            return Self::EMPTY;
        }
        Self::fully_visible(self.first_visible, self.last_visible)
    }

    /// Restrict both the rendered and visible intervals to `[lo, hi]`.
    /// Returns `EMPTY` when nothing of the rendered interval survives.
    #[must_use]
    pub fn clamped_to(&self, lo: i64, hi: i64) -> Self {
        if self.is_empty() || hi < lo {
            return Self::EMPTY;
        }
        let first_rendered = self.first_rendered.max(lo);
        let last_rendered = self.last_rendered.min(hi);
        if last_rendered < first_rendered {
            return Self::EMPTY;
        }
        let first_visible = self.first_visible.max(lo);
        let last_visible = self.last_visible.min(hi);
        let (first_visible, last_visible) = if last_visible < first_visible {
            (NO_INDEX, NO_INDEX)
        } else {
            (first_visible, last_visible)
        };
        Self {
            first_rendered,
            last_rendered,
            first_visible,
            last_visible,
        }
    }
}

impl Default for RenderedRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Grid axis: rows run top-to-bottom, columns left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

/// The six overlay panes of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaneKind {
    /// Frozen rows pinned to the top edge
    Top,
    /// Frozen rows pinned to the bottom edge
    Bottom,
    /// Frozen columns pinned to the left edge
    Left,
    /// Frozen columns pinned to the right edge
    Right,
    /// Top-left intersection of frozen rows and frozen columns
    Corner,
    /// The scrollable body
    Body,
}

/// Where a pane's window on a given axis comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AxisSource {
    FixedLeading,
    FixedTrailing,
    Scrollable,
}

impl PaneKind {
    /// Deterministic mapping from pane kind to per-axis window source.
    ///
    /// A pane fixed on one axis follows the scrollable body on the other:
    /// the top overlay spans whatever columns the body currently renders.
    pub(crate) fn source(self, axis: Axis) -> AxisSource {
        match (self, axis) {
            (Self::Top, Axis::Row)
            | (Self::Left, Axis::Column)
            | (Self::Corner, Axis::Row | Axis::Column) => AxisSource::FixedLeading,
            (Self::Bottom, Axis::Row) | (Self::Right, Axis::Column) => AxisSource::FixedTrailing,
            (Self::Top | Self::Bottom | Self::Body, Axis::Column)
            | (Self::Left | Self::Right | Self::Body, Axis::Row) => AxisSource::Scrollable,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_counts() {
        assert_eq!(RenderedRange::EMPTY.rendered_count(), 0);
        assert_eq!(RenderedRange::EMPTY.visible_count(), 0);
        assert!(RenderedRange::EMPTY.is_empty());
    }

    #[test]
    fn test_fully_visible_counts() {
        let range = RenderedRange::fully_visible(3, 7);
        assert_eq!(range.rendered_count(), 5);
        assert_eq!(range.visible_count(), 5);
        assert!(!range.is_empty());
    }

    #[test]
    fn test_clamp_shrinks_both_intervals() {
        let range = RenderedRange {
            first_rendered: 0,
            last_rendered: 20,
            first_visible: 5,
            last_visible: 15,
        };
        let clamped = range.clamped_to(10, 30);
        assert_eq!(clamped.first_rendered, 10);
        assert_eq!(clamped.last_rendered, 20);
        assert_eq!(clamped.first_visible, 10);
        assert_eq!(clamped.last_visible, 15);
    }

    #[test]
    fn test_clamp_to_disjoint_interval_is_empty() {
        let range = RenderedRange::fully_visible(0, 5);
        assert_eq!(range.clamped_to(10, 20), RenderedRange::EMPTY);
    }

    #[test]
    fn test_corner_sources_are_fixed_on_both_axes() {
        assert_eq!(PaneKind::Corner.source(Axis::Row), AxisSource::FixedLeading);
        assert_eq!(
            PaneKind::Corner.source(Axis::Column),
            AxisSource::FixedLeading
        );
    }

    #[test]
    fn test_fixed_panes_follow_body_on_cross_axis() {
        assert_eq!(PaneKind::Top.source(Axis::Column), AxisSource::Scrollable);
        assert_eq!(PaneKind::Left.source(Axis::Row), AxisSource::Scrollable);
        assert_eq!(PaneKind::Right.source(Axis::Row), AxisSource::Scrollable);
        assert_eq!(
            PaneKind::Bottom.source(Axis::Column),
            AxisSource::Scrollable
        );
    }
}
