// SPDX-License-Identifier: MPL-2.0
//! Slide-in notification banner ("shout") for Iced applications.
//!
//! A shout drops in from the top of the window, shows a title, subtitle and
//! optional image, dismisses itself after its announcement's duration, and
//! can be dismissed early with a tap or an interactive drag-to-dismiss
//! gesture.
//!
//! The [`center::ShoutCenter`] service owns the single visible banner and
//! guarantees a new request retires the previous one first. The embedding
//! supplies a [`host::Host`] adapter over its view hierarchy, constraint
//! layout and animation scheduler, feeds typed [`banner::Event`]s in, and
//! renders the skin with [`widget::view`].

#![doc(html_root_url = "https://docs.rs/iced_shout/0.1.0")]

pub mod announcement;
pub mod banner;
pub mod center;
pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod style;
pub mod widget;

pub use announcement::Announcement;
pub use banner::{BannerView, Event};
pub use center::{BannerId, ShoutCenter};
pub use events::PresentationEvent;
pub use host::Host;
pub use style::BannerStyle;
