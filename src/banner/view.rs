// SPDX-License-Identifier: MPL-2.0
//! Banner view lifecycle.
//!
//! A [`BannerView`] owns the presentation of a single announcement:
//! constraint bookkeeping against the host, the auto-dismiss timer, tap and
//! drag handling, and the cleanup path every dismissal trigger converges on.
//! Cleanup runs exactly once per presentation no matter how many triggers
//! race for it.

use std::fmt;
use std::time::Instant;

use crate::announcement::Announcement;
use crate::banner::drag::{self, DragSession};
use crate::banner::timer::DisplayTimer;
use crate::banner::Event;
use crate::host::{Anchor, Animation, AnimationId, Constraint, ConstraintId, Host};
use crate::style::BannerStyle;

/// Transient notification banner bound to one announcement at a time.
pub struct BannerView {
    style: BannerStyle,
    announcement: Option<Announcement>,
    timer: DisplayTimer,
    completion: Option<Box<dyn FnOnce()>>,
    interaction_suppressed: bool,
    drag: Option<DragSession>,
    should_dismiss_on_settle: bool,
    attached: bool,
    current_height: f32,
    height_constraint: Option<ConstraintId>,
    leading_constraint: Option<ConstraintId>,
    trailing_constraint: Option<ConstraintId>,
    top_constraint: Option<ConstraintId>,
    exit_animation: Option<AnimationId>,
}

impl BannerView {
    #[must_use]
    pub fn new(style: BannerStyle) -> Self {
        let current_height = style.metrics.expanded_height;
        Self {
            style,
            announcement: None,
            timer: DisplayTimer::default(),
            completion: None,
            interaction_suppressed: false,
            drag: None,
            should_dismiss_on_settle: false,
            attached: false,
            current_height,
            height_constraint: None,
            leading_constraint: None,
            trailing_constraint: None,
            top_constraint: None,
            exit_animation: None,
        }
    }

    /// Configures, stores the completion and presents in one step.
    pub fn craft(
        &mut self,
        host: &mut dyn Host,
        announcement: Announcement,
        completion: Option<Box<dyn FnOnce()>>,
        now: Instant,
    ) {
        self.configure(announcement, now);
        self.completion = completion;
        self.present(host);
    }

    /// Stores the announcement and restarts the auto-dismiss timer.
    pub fn configure(&mut self, announcement: Announcement, now: Instant) {
        self.timer.cancel();
        self.timer.schedule(now, announcement.duration());
        self.should_dismiss_on_settle = false;
        self.announcement = Some(announcement);
    }

    /// Attaches to the host and animates to the expanded position.
    ///
    /// Silently does nothing when the host has no window to attach to, or
    /// when the view is already presenting.
    pub fn present(&mut self, host: &mut dyn Host) {
        if self.attached || !host.attach() {
            return;
        }
        self.attached = true;
        host.set_interaction_enabled(true);
        host.set_orientation_observed(true);

        let metrics = self.style.metrics;
        let safe = host.safe_area();

        // Park above the visible area, pinned to the window edges.
        self.leading_constraint = Some(host.install_constraint(Constraint::new(
            Anchor::Leading,
            safe.left_or(metrics.left_offset),
        )));
        self.trailing_constraint = Some(host.install_constraint(Constraint::new(
            Anchor::Trailing,
            safe.right_or(metrics.right_offset),
        )));
        self.top_constraint = Some(host.install_constraint(Constraint::new(
            Anchor::Top,
            -(metrics.top_inset + metrics.expanded_height),
        )));
        self.height_constraint = Some(host.install_constraint(Constraint::new(
            Anchor::Height,
            metrics.expanded_height,
        )));
        host.run_layout();

        // Slide to the on-screen position with the entrance spring.
        self.set_height(host, metrics.expanded_height);
        if let Some(top) = self.top_constraint {
            host.update_constraint(top, metrics.top_inset + safe.top_or(metrics.top_offset));
        }
        host.animate(Animation::entrance());
    }

    /// Dismisses the banner.
    ///
    /// `moving: true` slides back to the collapsed position; `moving: false`
    /// fades instead, used for forced preemption and orientation changes.
    /// Both paths converge on the same cleanup, and a second trigger while
    /// an exit animation is in flight short-circuits it and cleans up now.
    pub fn dismiss(&mut self, host: &mut dyn Host, moving: bool) {
        if !self.attached {
            return;
        }
        host.set_interaction_enabled(false);
        self.interaction_suppressed = true;
        self.timer.cancel();

        if self.exit_animation.is_some() {
            self.finish_now(host);
            return;
        }

        if moving {
            let metrics = self.style.metrics;
            let safe_top = host.safe_area().top_or(metrics.top_offset);
            if let Some(top) = self.top_constraint {
                host.update_constraint(
                    top,
                    -(metrics.top_inset + metrics.expanded_height + safe_top),
                );
            }
            self.exit_animation = Some(host.animate(Animation::slide_out()));
        } else {
            self.exit_animation = Some(host.animate(Animation::fade_out()));
        }
    }

    /// Short-circuits any in-flight exit animation and runs cleanup.
    pub(crate) fn finish_now(&mut self, host: &mut dyn Host) {
        if let Some(id) = self.exit_animation.take() {
            host.cancel_animation(id);
        }
        self.cleanup(host);
    }

    /// Routes one typed event.
    pub fn handle_event(&mut self, host: &mut dyn Host, event: Event) {
        match event {
            Event::Tapped => self.on_tap(host),
            Event::DragBegan { translation } => self.on_drag_began(host, translation),
            Event::DragMoved { translation } => self.on_drag_moved(host, translation),
            Event::DragEnded { velocity } => self.on_drag_ended(host, velocity),
            Event::Tick(now) => self.on_tick(host, now),
            Event::AnimationFinished(id) => self.on_animation_finished(host, id),
            Event::OrientationChanged => self.dismiss(host, false),
        }
    }

    fn on_tap(&mut self, host: &mut dyn Host) {
        if self.interaction_suppressed || !self.attached {
            return;
        }
        let Some(announcement) = self.announcement.as_ref() else {
            return;
        };
        announcement.run_action();
        self.dismiss(host, true);
    }

    fn on_drag_began(&mut self, host: &mut dyn Host, translation: f32) {
        if self.interaction_suppressed || !self.attached || !self.style.drag_enabled {
            return;
        }
        self.drag = Some(DragSession::begin(translation));
        host.set_subtitle_scroll_enabled(true);
    }

    fn on_drag_moved(&mut self, host: &mut dyn Host, translation: f32) {
        let Some(session) = self.drag else {
            return;
        };
        let metrics = self.style.metrics;
        let safe_top = host.safe_area().top_or(metrics.top_offset);
        let content_fill = metrics.content_fill_height(host.subtitle_content_height());
        let update = drag::resolve_height(
            session.diff(translation),
            metrics.expanded_height,
            content_fill,
        );
        self.set_height(host, update.height + safe_top);
        host.set_subtitle_scroll_enabled(update.scroll_enabled);
        host.run_layout();
    }

    fn on_drag_ended(&mut self, host: &mut dyn Host, velocity: f32) {
        // Tolerate an end without a matching begin.
        if self.drag.take().is_none() {
            return;
        }
        host.set_subtitle_scroll_enabled(false);
        if drag::commits_dismissal(velocity, self.should_dismiss_on_settle) {
            self.dismiss(host, true);
        } else {
            let metrics = self.style.metrics;
            let safe_top = host.safe_area().top_or(metrics.top_offset);
            self.set_height(host, safe_top + metrics.expanded_height);
            host.animate(Animation::snap_back());
        }
    }

    fn on_tick(&mut self, host: &mut dyn Host, now: Instant) {
        if !self.timer.fire_if_due(now) {
            return;
        }
        if self.drag.is_some() {
            // Don't yank the banner out from under an active touch; the
            // settle decision picks this up at drag end.
            self.should_dismiss_on_settle = true;
            return;
        }
        self.dismiss(host, true);
    }

    fn on_animation_finished(&mut self, host: &mut dyn Host, id: AnimationId) {
        if self.exit_animation == Some(id) {
            self.exit_animation = None;
            self.cleanup(host);
        }
    }

    fn set_height(&mut self, host: &mut dyn Host, constant: f32) {
        self.current_height = constant;
        if let Some(height) = self.height_constraint {
            host.update_constraint(height, constant);
        }
    }

    /// Tears the presentation down. Runs at most once per presentation.
    fn cleanup(&mut self, host: &mut dyn Host) {
        if !self.attached {
            return;
        }
        self.attached = false;
        host.set_interaction_enabled(false);
        self.timer.cancel();
        self.drag = None;
        for id in [
            self.height_constraint.take(),
            self.leading_constraint.take(),
            self.trailing_constraint.take(),
            self.top_constraint.take(),
        ]
        .into_iter()
        .flatten()
        {
            host.remove_constraint(id);
        }
        if let Some(completion) = self.completion.take() {
            completion();
        }
        host.set_orientation_observed(false);
        host.detach();
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a dismissal has begun and further interaction is ignored.
    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.interaction_suppressed
    }

    #[must_use]
    pub fn announcement(&self) -> Option<&Announcement> {
        self.announcement.as_ref()
    }

    #[must_use]
    pub fn style(&self) -> &BannerStyle {
        &self.style
    }

    /// The height constant last written to the host, read by the skin.
    #[must_use]
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    #[must_use]
    pub fn drag_in_progress(&self) -> bool {
        self.drag.is_some()
    }

    /// Whether the auto-dismiss timer fired mid-drag and the dismissal is
    /// waiting on the settle decision.
    #[must_use]
    pub fn dismissal_deferred(&self) -> bool {
        self.should_dismiss_on_settle
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_scheduled()
    }

    #[must_use]
    pub fn has_installed_constraints(&self) -> bool {
        self.height_constraint.is_some()
            || self.leading_constraint.is_some()
            || self.trailing_constraint.is_some()
            || self.top_constraint.is_some()
    }
}

impl fmt::Debug for BannerView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerView")
            .field("announcement", &self.announcement)
            .field("attached", &self.attached)
            .field("interaction_suppressed", &self.interaction_suppressed)
            .field("drag", &self.drag)
            .field("should_dismiss_on_settle", &self.should_dismiss_on_settle)
            .field("current_height", &self.current_height)
            .finish_non_exhaustive()
    }
}
