// SPDX-License-Identifier: MPL-2.0
//! Transient captions shown centered over the image.
//!
//! A caption fades in, then out, and is dropped on the next tick after it
//! expired. Only one caption is visible: a new one replaces the current.
//! Info captions ("Carousel view", "View reset") can be turned off in the
//! settings; warnings are always shown.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{text, Container};
use iced::{alignment, Color, Element, Length, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
}

/// A caption identified by its i18n message key.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    message_key: String,
    severity: Severity,
    shown_at: Instant,
}

impl Caption {
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Owns the visible caption and its fade timing.
#[derive(Debug, Clone)]
pub struct Manager {
    current: Option<Caption>,
    fade: Duration,
    info_enabled: bool,
}

impl Manager {
    #[must_use]
    pub fn new(fade: Duration, info_enabled: bool) -> Self {
        Self {
            current: None,
            fade,
            info_enabled,
        }
    }

    /// Shows an info caption unless info captions are disabled.
    pub fn info(&mut self, message_key: impl Into<String>, now: Instant) {
        if self.info_enabled {
            self.push(message_key.into(), Severity::Info, now);
        }
    }

    /// Shows a warning caption.
    pub fn warning(&mut self, message_key: impl Into<String>, now: Instant) {
        self.push(message_key.into(), Severity::Warning, now);
    }

    fn push(&mut self, message_key: String, severity: Severity, now: Instant) {
        self.current = Some(Caption {
            message_key,
            severity,
            shown_at: now,
        });
    }

    /// Drops the caption once both fades are over.
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|caption| now.saturating_duration_since(caption.shown_at) >= self.fade * 2)
        {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Caption> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Opacity of the current caption: rises over the first fade, falls
    /// over the second.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        let Some(caption) = &self.current else {
            return 0.0;
        };
        if self.fade.is_zero() {
            return 0.0;
        }
        let t = now.saturating_duration_since(caption.shown_at).as_secs_f32()
            / self.fade.as_secs_f32();
        if t < 1.0 {
            t
        } else {
            (2.0 - t).clamp(0.0, 1.0)
        }
    }
}

/// Renders the current caption centered over the viewer.
pub fn view<'a, Message: 'a>(manager: &Manager, i18n: &I18n, now: Instant) -> Element<'a, Message> {
    let Some(caption) = manager.current() else {
        return Container::new(text("")).into();
    };

    let alpha = manager.opacity(now);
    let base = match caption.severity() {
        Severity::Info => palette::WHITE,
        Severity::Warning => palette::PRIMARY_500,
    };
    let color = Color { a: alpha, ..base };

    let label = text(i18n.tr(caption.message_key()))
        .size(typography::DISPLAY)
        .style(move |_theme: &Theme| text::Style { color: Some(color) });

    Container::new(label)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
