//! Viewport windowing engine.
//!
//! This module handles:
//! - Per-pane, per-axis render window computation (frozen and scrollable)
//! - Coordinating the six overlay panes so their windows never overlap
//! - Clamping windows against grid bounds and fixed-pane boundaries
//! - The coverage invariant: every reachable index rendered by exactly one pane

mod calculator;
mod coordinator;
mod types;

pub use calculator::{fixed_pane_range, scrollable_range, PaneRole};
pub use coordinator::OverlaySnapshot;
pub use types::{
    Axis, FixedPaneSizes, GridDimensions, Overscan, PaneKind, RenderedRange, ScrollWindow,
    NO_INDEX,
};
