// SPDX-License-Identifier: MPL-2.0
//! Banner component: view lifecycle, drag machine and timer.
//!
//! # Components
//!
//! - [`view`] - `BannerView` owning one presentation end to end
//! - [`drag`] - `DragSession` and the drag-to-dismiss height regimes
//! - [`timer`] - cancelable auto-dismiss deadline
//!
//! The embedding translates raw toolkit input into [`Event`]s and feeds
//! them through [`BannerView::handle_event`] (usually via
//! [`ShoutCenter::handle_event`](crate::center::ShoutCenter::handle_event)).

pub mod drag;
pub mod timer;
pub mod view;

pub use drag::{DragSession, HeightUpdate, Regime};
pub use timer::DisplayTimer;
pub use view::BannerView;

use crate::host::AnimationId;
use std::time::Instant;

/// Typed events delivered to the banner by the embedding.
///
/// The embedding's gesture recognizers, clock and animation scheduler all
/// funnel through this one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The banner surface was tapped.
    Tapped,
    /// A vertical pan began at the given translation.
    DragBegan { translation: f32 },
    /// The pan moved to a new translation.
    DragMoved { translation: f32 },
    /// The pan ended (or was canceled) with the given instantaneous
    /// vertical velocity; negative values move upward.
    DragEnded { velocity: f32 },
    /// Periodic clock tick driving the auto-dismiss timer.
    Tick(Instant),
    /// A previously scheduled animation ran to completion.
    AnimationFinished(AnimationId),
    /// The device orientation changed; forces an unanimated dismissal.
    OrientationChanged,
}
