// SPDX-License-Identifier: MPL-2.0
//! Bottom toolbar with file, window and navigation actions.
//!
//! The toolbar is drawn over the image and slides in from the bottom edge;
//! its height follows the chrome animation and its content is clipped.

use crate::i18n::fluent::I18n;
use crate::image_navigation::NavigationInfo;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::Mode;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, text, tooltip, Container, Row, Space},
    Element, Length,
};

/// Contextual data needed to render the toolbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navigation: NavigationInfo,
    pub mode: Mode,
    pub fullscreen: bool,
    /// Whether a view mode switch is in progress.
    pub loading: bool,
    /// Current animated height in pixels.
    pub height: f32,
}

/// Messages emitted by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenFile,
    OpenFolder,
    ToggleFullscreen,
    Previous,
    Next,
    ToggleMode,
    ResetView,
    Refresh,
}

/// Render the toolbar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let navigation_enabled = !ctx.loading;

    let fullscreen_label = if ctx.fullscreen {
        "toolbar-windowed-label"
    } else {
        "toolbar-fullscreen-label"
    };
    let mode_label = match ctx.mode {
        Mode::Simple => "toolbar-carousel-label",
        Mode::Carousel => "toolbar-simple-label",
    };

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XXS)
        .align_y(Vertical::Center)
        .push(action(
            &ctx,
            "toolbar-open-label",
            "toolbar-open-file",
            Some(Message::OpenFile),
        ))
        .push(action(
            &ctx,
            "toolbar-folder-label",
            "toolbar-open-folder",
            Some(Message::OpenFolder),
        ))
        .push(action(
            &ctx,
            fullscreen_label,
            "toolbar-fullscreen",
            Some(Message::ToggleFullscreen),
        ))
        .push(Space::new().width(Length::Fill))
        .push(glyph_action(
            &ctx,
            "<",
            "toolbar-previous",
            (navigation_enabled && ctx.navigation.has_previous).then_some(Message::Previous),
        ))
        .push(glyph_action(
            &ctx,
            ">",
            "toolbar-next",
            (navigation_enabled && ctx.navigation.has_next).then_some(Message::Next),
        ))
        .push(Space::new().width(Length::Fill))
        .push(action(
            &ctx,
            mode_label,
            "toolbar-toggle-mode",
            navigation_enabled.then_some(Message::ToggleMode),
        ))
        .push(action(
            &ctx,
            "toolbar-refresh-label",
            "toolbar-refresh",
            navigation_enabled.then_some(Message::Refresh),
        ))
        .push(action(
            &ctx,
            "toolbar-reset-label",
            "toolbar-reset-view",
            Some(Message::ResetView),
        ));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .clip(true)
        .style(styles::chrome_band)
        .into()
}

fn action<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    tooltip_key: &str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    labelled(ctx, ctx.i18n.tr(label_key), tooltip_key, on_press)
}

fn glyph_action<'a>(
    ctx: &ViewContext<'a>,
    glyph: &str,
    tooltip_key: &str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    labelled(ctx, glyph.to_string(), tooltip_key, on_press)
}

fn labelled<'a>(
    ctx: &ViewContext<'a>,
    label: String,
    tooltip_key: &str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let button = button(text(label).size(typography::TITLE_MD))
        .on_press_maybe(on_press)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::overlay_button);

    tooltip::Tooltip::new(
        button,
        container(text(ctx.i18n.tr(tooltip_key)).size(typography::BODY))
            .padding(spacing::XXS)
            .style(styles::chrome_band),
        tooltip::Position::Top,
    )
    .gap(spacing::XXS)
    .into()
}
