//! Width breakpoint between single-pane and split-pane layout.
//!
//! - Single: list or detail, one at a time
//! - Split: list (40%) | detail or placeholder (60%)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Width, in density-independent units, at which the split layout starts.
pub const DEFAULT_BREAKPOINT_DP: f32 = 600.0;

/// Density-independent units covered by one terminal column.
pub const DEFAULT_DP_PER_COLUMN: f32 = 8.0;

/// How the shop arranges its panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// One pane: the list, or the detail of the selected product.
    #[default]
    Single,
    /// List on the left, detail or placeholder on the right.
    Split,
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Split => write!(f, "split"),
        }
    }
}

/// Maps a width measurement to a [`LayoutMode`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutPolicy {
    breakpoint_dp: f32,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BREAKPOINT_DP)
    }
}

impl LayoutPolicy {
    /// Create a policy with a custom breakpoint.
    pub fn new(breakpoint_dp: f32) -> Self {
        Self { breakpoint_dp }
    }

    pub fn breakpoint_dp(&self) -> f32 {
        self.breakpoint_dp
    }

    /// Split at or above the breakpoint, Single below it.
    ///
    /// Total: a NaN width compares false and yields Single.
    pub fn decide(&self, width_dp: f32) -> LayoutMode {
        if width_dp >= self.breakpoint_dp {
            LayoutMode::Split
        } else {
            LayoutMode::Single
        }
    }

    /// Decide for a terminal viewport.
    pub fn decide_viewport(&self, viewport: Viewport, dp_per_column: f32) -> LayoutMode {
        self.decide(viewport.width_dp(dp_per_column))
    }
}

/// Terminal size as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Width converted to density-independent units.
    pub fn width_dp(&self, dp_per_column: f32) -> f32 {
        f32::from(self.columns) * dp_per_column
    }
}
