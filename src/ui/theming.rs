// SPDX-License-Identifier: MPL-2.0
//! Theme selection and the colors derived from it.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Resolves the mode to a concrete Iced theme.
    #[must_use]
    pub fn theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Background behind the displayed image.
    #[must_use]
    pub fn viewer_surface(self) -> Color {
        if self.is_dark() {
            palette::GRAY_900
        } else {
            palette::GRAY_100
        }
    }
}

/// Background of the toolbar and the thumbnail strip.
#[must_use]
pub fn chrome_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..palette::PRIMARY_700
    }
}
