// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip shown at the top of the window.
//!
//! Each tile carries a [`TileRef`] so a click that races with a catalog
//! rebuild is detected instead of selecting the wrong image.

use crate::image_navigation::{SelectionState, TileRef};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{button, text, Column, Container, Row, Scrollable};
use iced::{alignment::Horizontal, ContentFit, Element, Length};
use std::path::Path;

/// Height taken by the label under each thumbnail.
const LABEL_HEIGHT: f32 = typography::CAPTION + spacing::XS;

/// Contextual data needed to render the strip.
pub struct ViewContext<'a> {
    pub selection: &'a SelectionState,
    /// Current animated height in pixels.
    pub height: f32,
    /// Fully revealed height, used to size the thumbnails.
    pub full_height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TileSelected(TileRef),
}

/// Render the strip.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let thumb_height = (ctx.full_height - LABEL_HEIGHT - spacing::XS * 2.0).max(spacing::MD);
    let thumb_width = thumb_height * 4.0 / 3.0;
    let current = ctx.selection.current_index();

    let tiles = ctx.selection.tiles().map(|(tile, path)| {
        let content = Column::new()
            .align_x(Horizontal::Center)
            .spacing(spacing::XXS)
            .push(
                Image::new(Handle::from_path(path))
                    .content_fit(ContentFit::Cover)
                    .width(Length::Fixed(thumb_width))
                    .height(Length::Fixed(thumb_height)),
            )
            .push(
                text(tile_label(path))
                    .size(typography::CAPTION)
                    .width(Length::Fixed(thumb_width))
                    .align_x(Horizontal::Center),
            );

        let tile_button = button(content)
            .padding(spacing::XXS)
            .on_press(Message::TileSelected(tile));
        let tile_button = if current == Some(tile.index) {
            tile_button.style(styles::selected_tile)
        } else {
            tile_button.style(styles::overlay_button)
        };
        Element::from(tile_button)
    });

    let row = Row::with_children(tiles)
        .spacing(spacing::XS)
        .padding(spacing::XXS);

    let strip = Scrollable::new(row)
        .width(Length::Fill)
        .direction(Direction::Horizontal(Scrollbar::new()));

    Container::new(strip)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .clip(true)
        .style(styles::chrome_band)
        .into()
}

/// File name in title case: each letter following a non-letter is
/// uppercased, every other letter lowercased (`my_trip.JPG` → `My_Trip.Jpg`).
pub fn tile_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    let mut label = String::with_capacity(name.len());
    let mut previous_is_letter = false;
    for c in name.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                label.extend(c.to_lowercase());
            } else {
                label.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            label.push(c);
            previous_is_letter = false;
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_label_title_cases_words() {
        assert_eq!(tile_label(Path::new("/p/my_trip.JPG")), "My_Trip.Jpg");
        assert_eq!(tile_label(Path::new("beach day.png")), "Beach Day.Png");
        assert_eq!(tile_label(Path::new("IMG2024x.gif")), "Img2024X.Gif");
    }

    #[test]
    fn tile_label_of_root_is_empty() {
        assert_eq!(tile_label(Path::new("/")), "");
    }

    #[test]
    fn strip_renders_for_empty_selection() {
        let selection = SelectionState::new();
        let _element = view(ViewContext {
            selection: &selection,
            height: 0.0,
            full_height: 100.0,
        });
    }
}
