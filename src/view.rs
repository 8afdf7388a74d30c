// SPDX-License-Identifier: MPL-2.0
//! Render composition for a notice.
//!
//! The tree, outermost first: a `mouse_area` driving hover state and the
//! body click, a styled card container, then a row holding the caller's
//! content and the optional close affordance. The close button captures its
//! own press, so activating it never reaches the body click handler.

use crate::notice::{Message, Notice};
use crate::tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, mouse_area, text, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

impl Notice {
    /// Renders the notice around the given body content.
    ///
    /// The content element is opaque to the widget and rendered verbatim.
    /// Emitted messages are this notice's own; parents hosting several
    /// notices map them with the notice key.
    pub fn view<'a>(&'a self, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
        let mut row = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(content.into()).width(Length::Fill));

        if let Some(resolved) = self.resolved_close() {
            let glyph = resolved.icon().unwrap_or_default().to_owned();
            let close_button = button(text(glyph).size(typography::BODY))
                .on_press(Message::ClosePressed)
                .padding(spacing::XXS)
                .style(close_button_style);
            row = row.push(close_button);
        }

        let width = self.config().width.unwrap_or(sizing::NOTICE_WIDTH);
        let style_override = self.config().style;
        let card = Container::new(row)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| {
                style_override.unwrap_or_else(|| notice_container_style(theme))
            });

        mouse_area(card)
            .on_enter(Message::Entered)
            .on_exit(Message::Exited)
            .on_press(Message::Pressed)
            .into()
    }
}

/// Default style for the notice card.
fn notice_container_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background;

    container::Style {
        background: Some(iced::Background::Color(base.base.color)),
        border: iced::Border {
            color: base.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style for the close affordance.
fn close_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
