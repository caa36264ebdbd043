// SPDX-License-Identifier: MPL-2.0
//! Presentation lifecycle events for host-app diagnostics.
//!
//! Delivered to the observer registered with
//! [`ShoutCenter::set_observer`](crate::center::ShoutCenter::set_observer).
//! Embeddings typically forward these into their own diagnostics or
//! logging pipeline; the serde derives keep them exportable as structured
//! records.

use crate::center::BannerId;
use serde::{Deserialize, Serialize};

/// What the presentation service just did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PresentationEvent {
    /// A banner attached and began its entrance.
    Presented { banner: BannerId },

    /// A visible banner was retired to make room for a new request.
    Preempted { banner: BannerId },

    /// A dismissal began; `moving` selects the slide over the fade.
    Dismissed { banner: BannerId, moving: bool },

    /// A request was ignored because the host has no window.
    SuppressedNoWindow,

    /// The timer fired mid-drag; dismissal deferred to the settle decision.
    TimerDeferred { banner: BannerId },
}
