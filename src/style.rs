// SPDX-License-Identifier: MPL-2.0
//! Style tokens and the consolidated banner skin.
//!
//! Token modules follow the usual palette/typography/metrics split; the
//! [`BannerStyle`] struct folds them into a single value the banner and its
//! widget read from, so alternative skins are a matter of overriding fields.

use iced::Color;

pub mod palette {
    use super::Color;

    /// Banner background surface (black at 80% opacity).
    pub const BACKGROUND: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.8,
    };

    pub const TITLE: Color = Color::WHITE;
    pub const SUBTITLE: Color = Color::WHITE;

    /// Pill at the bottom edge hinting that the banner can be dragged.
    pub const DRAG_INDICATOR: Color = Color::from_rgb(0.91, 0.91, 0.91);
}

pub mod typography {
    pub const TITLE_SIZE: f32 = 12.0;
    pub const SUBTITLE_SIZE: f32 = 12.0;
}

pub mod metrics {
    /// Nominal on-screen banner height.
    pub const EXPANDED_HEIGHT: f32 = 65.0;

    // Container offsets from the window edges.
    pub const LEFT_OFFSET: f32 = 10.0;
    pub const RIGHT_OFFSET: f32 = 10.0;
    pub const TOP_OFFSET: f32 = 14.0;
    pub const BOTTOM_OFFSET: f32 = 14.0;
    pub const TOP_INSET: f32 = 26.0;

    pub const CONTAINER_CORNER_RADIUS: f32 = 10.0;
    pub const CONTAINER_SPACING: f32 = 10.0;
    pub const TITLES_SPACE: f32 = 1.0;

    pub const IMAGE_SIZE: f32 = 37.0;
    pub const IMAGE_CORNER_RADIUS: f32 = 6.0;

    pub const TITLE_HEIGHT: f32 = 14.0;
    pub const SUBTITLE_MAX_LINES: u32 = 1;

    pub const INDICATOR_WIDTH: f32 = 33.0;
    pub const INDICATOR_HEIGHT: f32 = 3.0;
    pub const INDICATOR_BOTTOM_OFFSET: f32 = 5.0;

    /// Vertical slop accepted when hit-testing the banner during a drag.
    pub const TOUCH_OFFSET: f32 = 80.0;
}

/// Geometry table for one banner skin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub expanded_height: f32,
    pub left_offset: f32,
    pub right_offset: f32,
    pub top_offset: f32,
    pub bottom_offset: f32,
    pub top_inset: f32,
    pub container_corner_radius: f32,
    pub container_spacing: f32,
    pub titles_space: f32,
    pub image_size: f32,
    pub image_corner_radius: f32,
    pub title_height: f32,
    pub subtitle_max_lines: u32,
    pub indicator_width: f32,
    pub indicator_height: f32,
    pub indicator_bottom_offset: f32,
    pub touch_offset: f32,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            expanded_height: metrics::EXPANDED_HEIGHT,
            left_offset: metrics::LEFT_OFFSET,
            right_offset: metrics::RIGHT_OFFSET,
            top_offset: metrics::TOP_OFFSET,
            bottom_offset: metrics::BOTTOM_OFFSET,
            top_inset: metrics::TOP_INSET,
            container_corner_radius: metrics::CONTAINER_CORNER_RADIUS,
            container_spacing: metrics::CONTAINER_SPACING,
            titles_space: metrics::TITLES_SPACE,
            image_size: metrics::IMAGE_SIZE,
            image_corner_radius: metrics::IMAGE_CORNER_RADIUS,
            title_height: metrics::TITLE_HEIGHT,
            subtitle_max_lines: metrics::SUBTITLE_MAX_LINES,
            indicator_width: metrics::INDICATOR_WIDTH,
            indicator_height: metrics::INDICATOR_HEIGHT,
            indicator_bottom_offset: metrics::INDICATOR_BOTTOM_OFFSET,
            touch_offset: metrics::TOUCH_OFFSET,
        }
    }
}

impl Metrics {
    /// Minimum height needed to show the full content without clipping.
    ///
    /// Used as the boundary between the tracking and damped drag regimes.
    #[must_use]
    pub fn content_fill_height(&self, subtitle_content_height: f32) -> f32 {
        self.top_offset
            + self.title_height
            + self.titles_space
            + subtitle_content_height
            + self.bottom_offset
            + self.indicator_height
            + self.indicator_bottom_offset
    }

    /// Height cap for the subtitle region at the configured line count.
    #[must_use]
    pub fn max_subtitle_height(&self, line_height: f32) -> f32 {
        if self.subtitle_max_lines == 0 {
            0.0
        } else {
            line_height * self.subtitle_max_lines as f32
        }
    }
}

/// Consolidated banner skin: colors, type sizes and geometry.
///
/// Alternative skins are field overrides on one value; a skin that wires
/// no pan gesture sets `drag_enabled: false`.
#[derive(Debug, Clone, PartialEq)]
pub struct BannerStyle {
    pub background: Color,
    pub title_color: Color,
    pub subtitle_color: Color,
    pub indicator_color: Color,
    pub title_size: f32,
    pub subtitle_size: f32,
    pub drag_enabled: bool,
    pub metrics: Metrics,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            background: palette::BACKGROUND,
            title_color: palette::TITLE,
            subtitle_color: palette::SUBTITLE,
            indicator_color: palette::DRAG_INDICATOR,
            title_size: typography::TITLE_SIZE,
            subtitle_size: typography::SUBTITLE_SIZE,
            drag_enabled: true,
            metrics: Metrics::default(),
        }
    }
}
