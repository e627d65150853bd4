// SPDX-License-Identifier: MPL-2.0
//! Image area rendering for both view modes.
//!
//! The displayed image (or the carousel crossfade) is drawn inside a
//! scrollable sized by the [`ViewTransform`]; wheel and press events are
//! captured by a mouse area so the scrollable itself never scrolls on wheel.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::state::{Mode, ViewModeState, ViewTransform};
use crate::ui::styles;
use iced::widget::image::{Handle, Image};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{mouse_area, text, Column, Container, Id, Scrollable, Stack};
use iced::{alignment, mouse, Color, ContentFit, Element, Length, Size};
use std::path::Path;
use std::time::Instant;

/// Identifier of the scrollable that carries the pan offset.
pub const SCROLLABLE_ID: &str = "viewer-image-scrollable";

/// Contextual data needed to render the image area.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view_mode: &'a ViewModeState,
    pub transform: &'a ViewTransform,
    pub viewport: Size,
    pub surface: Color,
    pub now: Instant,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    PanStarted,
    PanEnded,
    Wheel(mouse::ScrollDelta),
}

/// Render the image area, or the empty state when nothing is displayed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let image_box = ctx.transform.image_size(ctx.viewport);

    let layers: Option<Element<'a, Message>> = match ctx.view_mode.mode() {
        Mode::Simple => ctx
            .view_mode
            .displayed_path()
            .map(|path| image_layer(path, opacity::OPAQUE, image_box)),
        Mode::Carousel => ctx.view_mode.carousel_frame(ctx.now).map(|frame| {
            let mut stack = Stack::new();
            // Neighbors are drawn fully transparent so their textures are
            // already uploaded when they slide in.
            for path in frame.preload {
                stack = stack.push(image_layer(path, opacity::TRANSPARENT, image_box));
            }
            if let Some((path, alpha)) = frame.outgoing {
                stack = stack.push(image_layer(path, alpha, image_box));
            }
            let (path, alpha) = frame.incoming;
            stack.push(image_layer(path, alpha, image_box)).into()
        }),
    };

    let Some(layers) = layers else {
        return empty_state(ctx.i18n, ctx.surface);
    };

    let content_size = ctx.transform.content_size(ctx.viewport);
    let content = Container::new(layers)
        .width(Length::Fixed(content_size.width))
        .height(Length::Fixed(content_size.height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let interaction = if ctx.transform.is_dragging() {
        mouse::Interaction::Grabbing
    } else if content_size.width > ctx.viewport.width {
        mouse::Interaction::Grab
    } else {
        mouse::Interaction::default()
    };

    let captured = mouse_area(content)
        .on_press(Message::PanStarted)
        .on_release(Message::PanEnded)
        .on_scroll(Message::Wheel)
        .interaction(interaction);

    let scrollable = Scrollable::new(captured)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    Container::new(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::viewer_surface(ctx.surface))
        .into()
}

fn image_layer<'a>(path: &Path, alpha: f32, size: Size) -> Element<'a, Message> {
    Image::new(Handle::from_path(path))
        .content_fit(ContentFit::Contain)
        .width(Length::Fixed(size.width))
        .height(Length::Fixed(size.height))
        .opacity(alpha)
        .into()
}

fn centered<'a, M: 'a>(content: impl Into<Element<'a, M>>, surface: Color) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::viewer_surface(surface))
        .into()
}

/// Shown when the catalog is empty or nothing is selected.
pub fn empty_state<'a, M: 'a>(i18n: &I18n, surface: Color) -> Element<'a, M> {
    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(text(i18n.tr("empty-state-title")).size(typography::TITLE_MD))
        .push(
            text(i18n.tr("empty-state-hint"))
                .size(typography::BODY)
                .color(palette::GRAY_400),
        );
    centered(column, surface)
}

/// Shown while the view mode is being rebuilt.
pub fn loading<'a, M: 'a>(i18n: &I18n, surface: Color) -> Element<'a, M> {
    centered(
        text(i18n.tr("loading-text")).size(typography::TITLE_MD),
        surface,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_navigation::SelectionState;
    use std::time::Duration;

    #[test]
    fn empty_selection_renders_empty_state() {
        let i18n = I18n::default();
        let selection = SelectionState::new();
        let transform = ViewTransform::default();
        for mode in [Mode::Simple, Mode::Carousel] {
            let view_mode = ViewModeState::new(mode, &selection, Duration::from_millis(200));
            let _element = view(ViewContext {
                i18n: &i18n,
                view_mode: &view_mode,
                transform: &transform,
                viewport: Size::new(800.0, 600.0),
                surface: palette::GRAY_900,
                now: Instant::now(),
            });
        }
    }

    #[test]
    fn loading_screen_builds() {
        let i18n = I18n::default();
        let _element: Element<'_, Message> = loading(&i18n, palette::GRAY_100);
    }
}
