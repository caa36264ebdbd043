// SPDX-License-Identifier: MPL-2.0
//! Drag-to-dismiss state machine.
//!
//! Converts vertical pan deltas into live banner heights and resolves the
//! gesture end into a dismissal or a snap back. The height math is pure;
//! the presenting view adds the safe-area offset when it writes the result
//! into the height constraint.

/// Divisor damping height growth once the full content is revealed.
/// Empirical tuning constant.
const OVERSHOOT_DIVISOR: f32 = 20.0;

/// Live state between drag-begin and drag-end.
///
/// Its presence is the single source of truth for "a drag is in progress";
/// the auto-dismiss timer defers to the settle decision while one exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    start_offset: f32,
}

impl DragSession {
    /// Opens a session at the gesture's starting vertical translation.
    #[must_use]
    pub fn begin(translation: f32) -> Self {
        Self {
            start_offset: translation,
        }
    }

    /// The vertical translation recorded at gesture start.
    #[must_use]
    pub fn start_offset(&self) -> f32 {
        self.start_offset
    }

    /// Distance dragged back toward the start; positive values point toward
    /// collapse, negative values expand the banner.
    #[must_use]
    pub fn diff(&self, translation: f32) -> f32 {
        self.start_offset - translation
    }
}

/// Height regime resolved for one drag update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// Dragging at or past the start: height pinned to the expanded value.
    Pinned,
    /// Expanding but not yet revealing all content: height tracks the finger.
    Tracking,
    /// All content revealed: further growth is damped.
    Damped,
}

/// Result of one drag update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightUpdate {
    pub height: f32,
    pub scroll_enabled: bool,
    pub regime: Regime,
}

/// Resolves the banner height for a drag delta.
///
/// `expanded_height - diff == content_fill_height` is the exact boundary
/// between [`Regime::Tracking`] and [`Regime::Damped`]; equality stays in
/// the tracking regime.
#[must_use]
pub fn resolve_height(diff: f32, expanded_height: f32, content_fill_height: f32) -> HeightUpdate {
    if diff >= 0.0 {
        HeightUpdate {
            height: expanded_height,
            scroll_enabled: false,
            regime: Regime::Pinned,
        }
    } else if expanded_height - diff <= content_fill_height {
        HeightUpdate {
            height: expanded_height - diff,
            scroll_enabled: true,
            regime: Regime::Tracking,
        }
    } else {
        HeightUpdate {
            height: content_fill_height - diff / OVERSHOOT_DIVISOR,
            scroll_enabled: true,
            regime: Regime::Damped,
        }
    }
}

/// Settle decision at drag end.
///
/// Dismissal commits on upward velocity or on a timer that fired mid-drag;
/// anything else snaps back to the expanded height.
#[must_use]
pub fn commits_dismissal(velocity: f32, deferred_dismiss: bool) -> bool {
    velocity < 0.0 || deferred_dismiss
}
