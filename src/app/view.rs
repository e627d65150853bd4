// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The image area fills the window; the thumbnail strip, the toolbar and
//! the caption are stacked above it.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::image_navigation::SelectionState;
use crate::ui::caption;
use crate::ui::state::{ChromeState, ViewModeState, ViewTransform};
use crate::ui::{tile_strip, toolbar, viewer};
use iced::widget::{Column, Container, Space, Stack};
use iced::{Color, Element, Length, Size};
use std::time::Instant;

/// Bands thinner than this are not drawn.
const MIN_VISIBLE_EXTENT: f32 = 0.5;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub selection: &'a SelectionState,
    pub view_mode: &'a ViewModeState,
    pub chrome: &'a ChromeState,
    pub transform: &'a ViewTransform,
    pub captions: &'a caption::Manager,
    pub window_size: Size,
    pub fullscreen: bool,
    pub surface: Color,
    pub now: Instant,
}

/// Renders the current application view.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base: Element<'_, Message> = match ctx.screen {
        Screen::Loading => viewer::loading(ctx.i18n, ctx.surface),
        Screen::Viewer => viewer::view(viewer::ViewContext {
            i18n: ctx.i18n,
            view_mode: ctx.view_mode,
            transform: ctx.transform,
            viewport: ctx.window_size,
            surface: ctx.surface,
            now: ctx.now,
        })
        .map(Message::Viewer),
    };

    let settings = ctx.chrome.settings();
    let strip_extent = ctx.chrome.strip_extent(ctx.now);
    let toolbar_extent = ctx.chrome.toolbar_extent(ctx.now);

    let mut chrome = Column::new().width(Length::Fill).height(Length::Fill);
    if strip_extent > MIN_VISIBLE_EXTENT && !ctx.selection.is_empty() {
        chrome = chrome.push(
            tile_strip::view(tile_strip::ViewContext {
                selection: ctx.selection,
                height: strip_extent,
                full_height: settings.strip_height,
            })
            .map(Message::TileStrip),
        );
    }
    chrome = chrome.push(Space::new().height(Length::Fill));
    if toolbar_extent > MIN_VISIBLE_EXTENT {
        chrome = chrome.push(
            toolbar::view(toolbar::ViewContext {
                i18n: ctx.i18n,
                navigation: ctx.selection.navigation_info(),
                mode: ctx.view_mode.mode(),
                fullscreen: ctx.fullscreen,
                loading: ctx.view_mode.is_loading(),
                height: toolbar_extent,
            })
            .map(Message::Toolbar),
        );
    }

    let stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(chrome)
        .push(caption::view(ctx.captions, ctx.i18n, ctx.now));

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
