// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles for the chrome overlays.

use crate::ui::design_tokens::{opacity, palette};
use crate::ui::theming::chrome_background;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Style for buttons drawn over the image (toolbar, thumbnails).
pub fn overlay_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Hovered => (opacity::OVERLAY_STRONG, palette::WHITE),
        button::Status::Pressed => (opacity::OPAQUE, palette::WHITE),
        button::Status::Disabled => (opacity::TRANSPARENT, palette::GRAY_400),
        button::Status::Active => (opacity::OVERLAY_MEDIUM, palette::WHITE),
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color,
        border: Border::default(),
        ..button::Style::default()
    }
}

/// Style for the thumbnail of the selected image.
pub fn selected_tile(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::WHITE,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..button::Style::default()
    }
}

/// Translucent band behind the toolbar and the thumbnail strip.
pub fn chrome_band(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(chrome_background())),
        text_color: Some(palette::WHITE),
        ..container::Style::default()
    }
}

/// Solid background behind the image.
pub fn viewer_surface(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}
