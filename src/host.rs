// SPDX-License-Identifier: MPL-2.0
//! Host capability port.
//!
//! This module defines the [`Host`] trait through which the banner talks to
//! the embedding toolkit: view attachment, constraint-based layout and the
//! animation scheduler. Adapters implement this trait over a concrete
//! window/view stack; the banner consumes the capabilities and never owns
//! any of them.
//!
//! Animations are fire-and-forget: [`Host::animate`] returns an
//! [`AnimationId`] and the embedding delivers
//! [`Event::AnimationFinished`](crate::banner::Event::AnimationFinished)
//! back on the same event queue once the transition settles.

use std::time::Duration;

/// Handle for a constraint installed through [`Host::install_constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(u64);

impl ConstraintId {
    /// Creates a handle from a host-chosen raw value.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Handle for an animation scheduled through [`Host::animate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationId(u64);

impl AnimationId {
    /// Creates a handle from a host-chosen raw value.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Window edges and dimensions the banner pins itself to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Leading,
    Trailing,
    Top,
    Height,
}

/// A constraint request: an anchor plus its constant.
///
/// `Top` constants are offsets of the banner's top edge from the window's
/// top edge; negative values park the banner above the visible area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub anchor: Anchor,
    pub constant: f32,
}

impl Constraint {
    #[must_use]
    pub fn new(anchor: Anchor, constant: f32) -> Self {
        Self { anchor, constant }
    }
}

/// Easing curves the banner requests from the host's animation scheduler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Spring easing with a damping ratio and initial velocity.
    Spring { damping: f32, initial_velocity: f32 },
    /// Symmetric ease-in/ease-out.
    EaseInOut,
    /// Constant rate, used for fades.
    Linear,
}

/// A request to animate the constraint changes applied since the last
/// layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub duration: Duration,
    pub curve: Curve,
}

impl Animation {
    /// Entrance transition: a pronounced spring onto the screen.
    #[must_use]
    pub fn entrance() -> Self {
        Self {
            duration: Duration::from_secs(1),
            curve: Curve::Spring {
                damping: 0.5,
                initial_velocity: 5.0,
            },
        }
    }

    /// Dismissal slide back above the visible area.
    #[must_use]
    pub fn slide_out() -> Self {
        Self {
            duration: Duration::from_millis(300),
            curve: Curve::EaseInOut,
        }
    }

    /// Fade used for forced preemption and orientation changes.
    #[must_use]
    pub fn fade_out() -> Self {
        Self {
            duration: Duration::from_secs(1),
            curve: Curve::Linear,
        }
    }

    /// Non-bouncy return to the expanded height after a released drag.
    #[must_use]
    pub fn snap_back() -> Self {
        Self {
            duration: Duration::from_millis(200),
            curve: Curve::Spring {
                damping: 1.0,
                initial_velocity: 0.0,
            },
        }
    }
}

/// Safe-area insets reported by the host window.
///
/// Zero insets fall back to the style's content offsets, matching hardware
/// without a cutout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SafeArea {
    pub top: f32,
    pub left: f32,
    pub right: f32,
}

impl SafeArea {
    /// Top inset, or `fallback` when the window reports none.
    #[must_use]
    pub fn top_or(self, fallback: f32) -> f32 {
        if self.top > 0.0 {
            self.top
        } else {
            fallback
        }
    }

    /// Left inset, or `fallback` when the window reports none.
    #[must_use]
    pub fn left_or(self, fallback: f32) -> f32 {
        if self.left > 0.0 {
            self.left
        } else {
            fallback
        }
    }

    /// Right inset, or `fallback` when the window reports none.
    #[must_use]
    pub fn right_or(self, fallback: f32) -> f32 {
        if self.right > 0.0 {
            self.right
        } else {
            fallback
        }
    }
}

/// Capabilities the banner consumes from the embedding toolkit.
///
/// All calls happen on the single UI sequencing context; implementations do
/// not need internal synchronization.
pub trait Host {
    /// Attaches the banner view to the host hierarchy.
    ///
    /// Returns `false` when no window or root view is available; the caller
    /// treats that as a silent no-op and builds nothing.
    fn attach(&mut self) -> bool;

    /// Removes the banner view from the hierarchy.
    fn detach(&mut self);

    /// Installs a constraint and returns its handle.
    fn install_constraint(&mut self, constraint: Constraint) -> ConstraintId;

    /// Updates the constant of a previously installed constraint.
    fn update_constraint(&mut self, id: ConstraintId, constant: f32);

    /// Removes a previously installed constraint.
    fn remove_constraint(&mut self, id: ConstraintId);

    /// Runs a synchronous layout pass so constraint changes become visible.
    fn run_layout(&mut self);

    /// Animates the constraint changes applied since the last layout pass.
    ///
    /// Completion is delivered back as an `AnimationFinished` event carrying
    /// the returned handle.
    fn animate(&mut self, animation: Animation) -> AnimationId;

    /// Cancels an in-flight animation. Its completion event must not be
    /// delivered afterwards.
    fn cancel_animation(&mut self, id: AnimationId);

    /// Enables or disables user interaction on the banner surface.
    fn set_interaction_enabled(&mut self, enabled: bool);

    /// Enables or disables scrolling within the subtitle region.
    fn set_subtitle_scroll_enabled(&mut self, enabled: bool);

    /// Returns the window's safe-area insets.
    fn safe_area(&self) -> SafeArea;

    /// Returns the measured content height of the subtitle region.
    fn subtitle_content_height(&self) -> f32;

    /// Registers or deregisters the device-orientation observer.
    fn set_orientation_observed(&mut self, observed: bool);
}
