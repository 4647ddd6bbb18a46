//! Per-pane window strategies.
//!
//! Two pure strategies cover all six pane kinds: a fixed pane renders a
//! configured number of indices anchored to one edge of the grid, and the
//! scrollable body renders a scroll-driven window of viewport capacity plus
//! optional overscan. Both are total functions over validated inputs;
//! negative values are rejected earlier, at the provider boundary.

use super::types::RenderedRange;

/// Which edge of the axis a fixed pane is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneRole {
    /// Anchored to index 0 (top rows, left columns)
    Leading,
    /// Anchored to the last index (bottom rows, right columns)
    Trailing,
}

/// Render window of a fixed pane on one axis.
///
/// A fixed pane has no independent scroll, so its visible range equals its
/// rendered range. The rendered count is `min(fixed_count, total_count)`;
/// an empty grid or a zero-size pane yields the `-1` sentinels.
#[must_use]
pub fn fixed_pane_range(total_count: u32, fixed_count: u32, role: PaneRole) -> RenderedRange {
    if total_count == 0 {
        return RenderedRange::EMPTY;
    }
    let rendered = fixed_count.min(total_count);
    if rendered == 0 {
        return RenderedRange::EMPTY;
    }
    let first = match role {
        PaneRole::Leading => 0,
        // total - fixed, clamped at 0 (rendered is already min(fixed, total))
        PaneRole::Trailing => total_count - rendered,
    };
    let last = first + rendered - 1;
    RenderedRange::fully_visible(i64::from(first), i64::from(last))
}

/// Render window of the scrollable body on one axis.
///
/// The visible interval starts at `first_scrollable` and spans
/// `viewport_capacity` indices, clamped to the grid. The rendered interval
/// widens it by `overscan` on both sides. If the scroll position points past
/// the end of the data (the dataset shrank under the viewport), the window
/// is re-anchored to `max(0, total - capacity)` so a full window stays in
/// view instead of an empty one.
#[must_use]
pub fn scrollable_range(
    total_count: u32,
    first_scrollable: u32,
    viewport_capacity: u32,
    overscan: u32,
) -> RenderedRange {
    if total_count == 0 {
        return RenderedRange::EMPTY;
    }
    let first = if first_scrollable >= total_count {
        total_count.saturating_sub(viewport_capacity)
    } else {
        first_scrollable
    };

    let total = i64::from(total_count);
    let first = i64::from(first);
    let capacity = i64::from(viewport_capacity);
    let overscan = i64::from(overscan);

    let first_rendered = (first - overscan).max(0);
    let last_rendered = (first + capacity - 1 + overscan).min(total - 1);
    if last_rendered < first_rendered {
        return RenderedRange::EMPTY;
    }

    let first_visible = first.min(total - 1);
    let last_visible = (first + capacity - 1).min(total - 1);
    let (first_visible, last_visible) = if last_visible < first_visible {
        // Zero capacity with overscan still renders, but nothing is visible
        (-1, -1)
    } else {
        (first_visible, last_visible)
    };

    RenderedRange {
        first_rendered,
        last_rendered,
        first_visible,
        last_visible,
    }
}
