// SPDX-License-Identifier: MPL-2.0
//! Core announcement data structure.
//!
//! An [`Announcement`] describes one notification request: what the banner
//! shows, for how long, and what happens when it is tapped.

use iced::widget::image;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Shortest display duration an announcement can request.
///
/// Durations below this are clamped up so a banner never dismisses before
/// its entrance settles.
pub const MIN_DISPLAY_DURATION: Duration = Duration::from_millis(100);

/// One notification request.
///
/// Immutable once constructed; the presenting banner holds it for the
/// lifetime of a single presentation.
#[derive(Clone)]
pub struct Announcement {
    title: String,
    subtitle: String,
    image: Option<image::Handle>,
    duration: Duration,
    action: Option<Rc<dyn Fn()>>,
}

impl Announcement {
    /// Creates an announcement displayed for `duration`.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            image: None,
            duration: duration.max(MIN_DISPLAY_DURATION),
            action: None,
        }
    }

    /// Attaches an image shown in the banner's leading slot.
    #[must_use]
    pub fn with_image(mut self, handle: image::Handle) -> Self {
        self.image = Some(handle);
        self
    }

    /// Attaches a callback invoked when the banner is tapped, before the
    /// tap-triggered dismissal.
    #[must_use]
    pub fn with_action(mut self, action: impl Fn() + 'static) -> Self {
        self.action = Some(Rc::new(action));
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    /// Returns the image handle, if one was supplied.
    ///
    /// The banner hides its image slot when this is `None`.
    #[must_use]
    pub fn image(&self) -> Option<&image::Handle> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Runs the tap action, if any.
    pub(crate) fn run_action(&self) {
        if let Some(action) = &self.action {
            action();
        }
    }
}

impl fmt::Debug for Announcement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Announcement")
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("image", &self.image.is_some())
            .field("duration", &self.duration)
            .field("action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn zero_duration_is_clamped_up() {
        let announcement = Announcement::new("Hi", "", Duration::ZERO);
        assert_eq!(announcement.duration(), MIN_DISPLAY_DURATION);
    }

    #[test]
    fn requested_duration_is_kept() {
        let announcement = Announcement::new("Hi", "", Duration::from_secs(3));
        assert_eq!(announcement.duration(), Duration::from_secs(3));
    }

    #[test]
    fn builder_sets_content() {
        let announcement = Announcement::new("New message", "From Alice", Duration::from_secs(2));
        assert_eq!(announcement.title(), "New message");
        assert_eq!(announcement.subtitle(), "From Alice");
        assert!(!announcement.has_image());
    }

    #[test]
    fn with_image_fills_the_slot() {
        let handle = image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let announcement =
            Announcement::new("Hi", "", Duration::from_secs(1)).with_image(handle);
        assert!(announcement.has_image());
        assert!(announcement.image().is_some());
    }

    #[test]
    fn run_action_invokes_the_callback() {
        let hits = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&hits);
        let announcement = Announcement::new("Hi", "", Duration::from_secs(1))
            .with_action(move || counter.set(counter.get() + 1));

        announcement.run_action();
        announcement.run_action();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn run_action_without_callback_is_a_no_op() {
        let announcement = Announcement::new("Hi", "", Duration::from_secs(1));
        announcement.run_action();
    }

    #[test]
    fn debug_elides_the_callback() {
        let announcement =
            Announcement::new("Hi", "there", Duration::from_secs(1)).with_action(|| {});
        let rendered = format!("{:?}", announcement);
        assert!(rendered.contains("action: true"));
        assert!(rendered.contains("\"Hi\""));
    }
}
