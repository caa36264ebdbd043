// SPDX-License-Identifier: MPL-2.0
//! Presentation service owning the single visible banner.
//!
//! The `ShoutCenter` enforces the component's central invariant: at most
//! one banner is attached to the host hierarchy at any instant. Requesting
//! a new banner retires the current one first, synchronously, so the
//! handle returned by [`ShoutCenter::present`] is the only attached banner
//! by the time the call returns.

use std::fmt;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::announcement::Announcement;
use crate::banner::{BannerView, Event};
use crate::events::PresentationEvent;
use crate::host::Host;
use crate::style::BannerStyle;

/// Handle for one presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a handle from a raw value.
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

/// Observer callback for [`PresentationEvent`]s.
pub type PresentationObserver = Box<dyn Fn(&PresentationEvent)>;

/// Owner of "the currently visible banner".
///
/// An explicit service object the embedding holds and passes around — not
/// ambient global state — so tests can run as many independent centers as
/// they like.
pub struct ShoutCenter {
    style: BannerStyle,
    current: Option<(BannerId, BannerView)>,
    next_id: u64,
    observer: Option<PresentationObserver>,
}

impl ShoutCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::with_style(BannerStyle::default())
    }

    /// Creates a center presenting banners with the given skin.
    #[must_use]
    pub fn with_style(style: BannerStyle) -> Self {
        Self {
            style,
            current: None,
            next_id: 0,
            observer: None,
        }
    }

    /// Registers an observer for presentation lifecycle events.
    pub fn set_observer(&mut self, observer: PresentationObserver) {
        self.observer = Some(observer);
    }

    /// Presents an announcement, retiring any banner already on screen.
    ///
    /// The retiring banner is preempted without the slide animation and its
    /// cleanup (including its completion callback) runs before the new view
    /// attaches. Without a host window the request is a silent no-op and no
    /// view is retained; `completion` is dropped unfired.
    pub fn present(
        &mut self,
        host: &mut dyn Host,
        now: Instant,
        announcement: Announcement,
        completion: Option<Box<dyn FnOnce()>>,
    ) -> BannerId {
        // Take the slot first so a completion callback re-entering the
        // center never observes the retiring view.
        if let Some((retired_id, mut retiring)) = self.current.take() {
            retiring.dismiss(host, false);
            retiring.finish_now(host);
            self.emit(PresentationEvent::Preempted { banner: retired_id });
        }

        let id = BannerId(self.next_id);
        self.next_id += 1;

        let mut view = BannerView::new(self.style.clone());
        view.craft(host, announcement, completion, now);

        if view.is_attached() {
            self.current = Some((id, view));
            self.emit(PresentationEvent::Presented { banner: id });
        } else {
            self.emit(PresentationEvent::SuppressedNoWindow);
        }
        id
    }

    /// Dismisses the current banner, if any.
    pub fn dismiss(&mut self, host: &mut dyn Host, moving: bool) {
        let Some((id, view)) = self.current.as_mut() else {
            return;
        };
        let id = *id;
        view.dismiss(host, moving);
        self.emit(PresentationEvent::Dismissed { banner: id, moving });
        self.prune();
    }

    /// Routes a typed event to the current banner.
    pub fn handle_event(&mut self, host: &mut dyn Host, event: Event) {
        let Some((id, view)) = self.current.as_mut() else {
            return;
        };
        let id = *id;
        let deferred_before = view.dismissal_deferred();
        view.handle_event(host, event);
        let newly_deferred = view.dismissal_deferred() && !deferred_before;
        if newly_deferred {
            self.emit(PresentationEvent::TimerDeferred { banner: id });
        }
        self.prune();
    }

    /// Returns the handle of the currently attached banner.
    #[must_use]
    pub fn current(&self) -> Option<BannerId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// Returns the currently attached banner view, for rendering.
    #[must_use]
    pub fn current_view(&self) -> Option<&BannerView> {
        self.current.as_ref().map(|(_, view)| view)
    }

    /// Drops the slot once its view has finished cleanup.
    fn prune(&mut self) {
        if let Some((_, view)) = &self.current {
            if !view.is_attached() {
                self.current = None;
            }
        }
    }

    fn emit(&self, event: PresentationEvent) {
        if let Some(observer) = &self.observer {
            observer(&event);
        }
    }
}

impl Default for ShoutCenter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ShoutCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShoutCenter")
            .field("current", &self.current)
            .field("next_id", &self.next_id)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
