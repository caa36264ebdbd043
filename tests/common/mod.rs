// SPDX-License-Identifier: MPL-2.0
//! Scripted host double recording every port call.
//!
//! Each integration test file compiles as a separate crate, so not every
//! helper is used in every file.

#![allow(dead_code)]

use iced_shout::host::{Anchor, Animation, AnimationId, Constraint, ConstraintId, Host, SafeArea};
use std::collections::HashMap;

/// In-memory [`Host`] implementation for scenario tests.
///
/// Constraints are tracked by anchor, animations queue until the test
/// "finishes" them and feeds the resulting ids back as events.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub window_available: bool,
    pub attached: bool,
    pub attach_count: usize,
    pub detach_count: usize,
    pub constraints: HashMap<u64, Constraint>,
    next_id: u64,
    pub pending_animations: Vec<(AnimationId, Animation)>,
    pub canceled_animations: Vec<AnimationId>,
    pub layout_runs: usize,
    pub interaction_enabled: bool,
    pub subtitle_scroll_enabled: bool,
    pub safe_area: SafeArea,
    pub subtitle_content_height: f32,
    pub orientation_observed: bool,
    pub orientation_registrations: usize,
    pub orientation_deregistrations: usize,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            window_available: true,
            interaction_enabled: true,
            subtitle_content_height: 20.0,
            ..Self::default()
        }
    }

    pub fn without_window() -> Self {
        Self {
            window_available: false,
            ..Self::new()
        }
    }

    /// The constant of the installed constraint on `anchor`, if any.
    pub fn constraint_constant(&self, anchor: Anchor) -> Option<f32> {
        self.constraints
            .values()
            .find(|constraint| constraint.anchor == anchor)
            .map(|constraint| constraint.constant)
    }

    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    /// Drains pending animations, returning their ids so the test can
    /// deliver `AnimationFinished` events.
    pub fn finish_animations(&mut self) -> Vec<AnimationId> {
        self.pending_animations
            .drain(..)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn last_animation(&self) -> Option<Animation> {
        self.pending_animations
            .last()
            .map(|(_, animation)| *animation)
    }
}

impl Host for FakeHost {
    fn attach(&mut self) -> bool {
        if !self.window_available {
            return false;
        }
        self.attached = true;
        self.attach_count += 1;
        true
    }

    fn detach(&mut self) {
        self.attached = false;
        self.detach_count += 1;
    }

    fn install_constraint(&mut self, constraint: Constraint) -> ConstraintId {
        let id = ConstraintId::new(self.next_id);
        self.next_id += 1;
        self.constraints.insert(id.raw(), constraint);
        id
    }

    fn update_constraint(&mut self, id: ConstraintId, constant: f32) {
        if let Some(constraint) = self.constraints.get_mut(&id.raw()) {
            constraint.constant = constant;
        }
    }

    fn remove_constraint(&mut self, id: ConstraintId) {
        self.constraints.remove(&id.raw());
    }

    fn run_layout(&mut self) {
        self.layout_runs += 1;
    }

    fn animate(&mut self, animation: Animation) -> AnimationId {
        let id = AnimationId::new(self.next_id);
        self.next_id += 1;
        self.pending_animations.push((id, animation));
        id
    }

    fn cancel_animation(&mut self, id: AnimationId) {
        self.pending_animations
            .retain(|(pending, _)| *pending != id);
        self.canceled_animations.push(id);
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
    }

    fn set_subtitle_scroll_enabled(&mut self, enabled: bool) {
        self.subtitle_scroll_enabled = enabled;
    }

    fn safe_area(&self) -> SafeArea {
        self.safe_area
    }

    fn subtitle_content_height(&self) -> f32 {
        self.subtitle_content_height
    }

    fn set_orientation_observed(&mut self, observed: bool) {
        if observed {
            self.orientation_registrations += 1;
        } else {
            self.orientation_deregistrations += 1;
        }
        self.orientation_observed = observed;
    }
}
