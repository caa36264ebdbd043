// SPDX-License-Identifier: MPL-2.0
//! Iced skin for the banner.
//!
//! Pure view functions: they render whatever the [`BannerView`] currently
//! holds (content, style tokens, the live height the drag machine last
//! wrote) and emit [`Event`]s for the embedding to route back through the
//! center. Geometry animation itself lives behind the host port.

use crate::banner::{BannerView, Event};
use crate::style::BannerStyle;
use iced::font::{self, Font};
use iced::widget::image::Image;
use iced::widget::{container, mouse_area, text, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Renders the banner surface, or an empty element when nothing is shown.
pub fn view(banner: &BannerView) -> Element<'_, Event> {
    let style = banner.style();
    let Some(announcement) = banner.announcement() else {
        return empty();
    };
    if !banner.is_attached() {
        return empty();
    }

    let metrics = style.metrics;

    let title = Text::new(announcement.title())
        .size(style.title_size)
        .font(Font {
            weight: font::Weight::Bold,
            ..Font::default()
        })
        .height(Length::Fixed(metrics.title_height))
        .style(text_style(style.title_color));

    let subtitle = Text::new(announcement.subtitle())
        .size(style.subtitle_size)
        .style(text_style(style.subtitle_color));

    // Cap the subtitle region at the configured line count; dragging the
    // banner open is what reveals longer content.
    let subtitle_cap = metrics.max_subtitle_height(style.subtitle_size * 1.3);
    let subtitle: Element<'_, Event> = if subtitle_cap > 0.0 {
        Container::new(subtitle)
            .height(Length::Fixed(subtitle_cap))
            .clip(true)
            .into()
    } else {
        subtitle.into()
    };

    let titles = Column::new()
        .spacing(metrics.titles_space)
        .push(title)
        .push(subtitle);

    let mut content = Row::new()
        .spacing(metrics.container_spacing)
        .align_y(alignment::Vertical::Center);
    // The image slot collapses entirely when no image was supplied.
    if let Some(handle) = announcement.image() {
        content = content.push(
            Image::new(handle.clone())
                .width(Length::Fixed(metrics.image_size))
                .height(Length::Fixed(metrics.image_size)),
        );
    }
    content = content.push(titles);

    let indicator = Container::new(text(""))
        .width(Length::Fixed(metrics.indicator_width))
        .height(Length::Fixed(metrics.indicator_height))
        .style(indicator_style(
            style.indicator_color,
            metrics.indicator_height / 2.0,
        ));

    let body = Column::new()
        .push(
            Container::new(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(Padding {
                    top: metrics.top_offset,
                    right: metrics.right_offset,
                    bottom: 0.0,
                    left: metrics.left_offset,
                }),
        )
        .push(
            Container::new(indicator)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .padding(Padding {
                    top: 0.0,
                    right: 0.0,
                    bottom: metrics.indicator_bottom_offset,
                    left: 0.0,
                }),
        );

    let surface = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(banner.current_height()))
        .style(surface_style(style));

    mouse_area(surface).on_press(Event::Tapped).into()
}

/// Renders the banner pinned to the top of the window.
pub fn view_overlay(banner: &BannerView) -> Element<'_, Event> {
    if banner.announcement().is_none() || !banner.is_attached() {
        return empty();
    }
    let metrics = banner.style().metrics;

    Container::new(view(banner))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(Padding {
            top: metrics.top_inset,
            right: metrics.right_offset,
            bottom: 0.0,
            left: metrics.left_offset,
        })
        .into()
}

fn empty<'a>() -> Element<'a, Event> {
    Container::new(text(""))
        .width(Length::Shrink)
        .height(Length::Shrink)
        .into()
}

fn text_style(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}

/// Style function for the rounded banner surface.
fn surface_style(style: &BannerStyle) -> impl Fn(&Theme) -> container::Style {
    let background = style.background;
    let radius = style.metrics.container_corner_radius;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Style function for the drag-indicator pill.
fn indicator_style(color: Color, radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::palette;

    #[test]
    fn surface_style_uses_the_skin_background() {
        let style = BannerStyle::default();
        let resolved = surface_style(&style)(&Theme::Dark);
        assert_eq!(
            resolved.background,
            Some(Background::Color(palette::BACKGROUND))
        );
    }

    #[test]
    fn indicator_style_uses_the_indicator_color() {
        let resolved = indicator_style(palette::DRAG_INDICATOR, 1.5)(&Theme::Dark);
        assert_eq!(
            resolved.background,
            Some(Background::Color(palette::DRAG_INDICATOR))
        );
    }

    #[test]
    fn title_style_carries_the_requested_color() {
        let resolved = text_style(palette::TITLE)(&Theme::Dark);
        assert_eq!(resolved.color, Some(palette::TITLE));
    }
}
