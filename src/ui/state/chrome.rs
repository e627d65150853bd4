// SPDX-License-Identifier: MPL-2.0
//! Auto-hiding chrome: the bottom toolbar and the top thumbnail strip.
//!
//! The shell polls [`ChromeState::tick`] on a fixed period with the last
//! known pointer state. Distances are measured from the bottom edge of the
//! window, so the toolbar band is `[0, toolbar_height)` and the strip band
//! is `(window_height - strip_height, window_height]`.

use super::animation::{ease_out_quad, progress};
use crate::config::ChromeSettings;
use std::time::{Duration, Instant};

/// Last known pointer state, in window coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointer {
    pub position: Option<(f32, f32)>,
    pub inside: bool,
}

impl Pointer {
    /// Distance between the pointer and the bottom edge of the window.
    fn from_bottom(&self, window_height: f32) -> Option<f32> {
        self.position.map(|(_, y)| window_height - y)
    }
}

/// An animated boolean: a target, the visible fraction the animation
/// started from, and the instant the target last changed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    shown: bool,
    from: f32,
    since: Option<Instant>,
}

impl Reveal {
    /// A reveal already settled in `shown` state, without animation.
    #[must_use]
    pub fn settled(shown: bool) -> Self {
        Self {
            shown,
            from: target(shown),
            since: None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// Requests a target state. Returns `false` (and keeps the running
    /// animation) when the target is already the requested one.
    ///
    /// Reversing a running animation continues from the fraction visible at
    /// `now` instead of jumping to the opposite end.
    pub fn set(&mut self, shown: bool, duration: Duration, now: Instant) -> bool {
        if self.shown == shown {
            return false;
        }
        self.from = self.amount(duration, now);
        self.shown = shown;
        self.since = Some(now);
        true
    }

    /// Visible fraction in `[0, 1]`, eased.
    #[must_use]
    pub fn amount(&self, duration: Duration, now: Instant) -> f32 {
        let to = target(self.shown);
        let Some(since) = self.since else {
            return to;
        };
        let eased = ease_out_quad(progress(since, duration, now));
        self.from + (to - self.from) * eased
    }

    pub fn is_animating(&self, duration: Duration, now: Instant) -> bool {
        self.since
            .is_some_and(|since| progress(since, duration, now) < 1.0)
    }
}

fn target(shown: bool) -> f32 {
    if shown {
        1.0
    } else {
        0.0
    }
}

/// What a tick changed, for logging and redraw decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeChange {
    pub toolbar: bool,
    pub strip: bool,
}

impl ChromeChange {
    pub fn any(self) -> bool {
        self.toolbar || self.strip
    }
}

/// Visibility of the toolbar and the thumbnail strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromeState {
    pub toolbar: Reveal,
    pub strip: Reveal,
    stay_open: bool,
    settings: ChromeSettings,
}

impl ChromeState {
    /// Starts with the toolbar shown and the strip hidden.
    pub fn new(settings: ChromeSettings) -> Self {
        Self {
            toolbar: Reveal::settled(true),
            strip: Reveal::settled(false),
            stay_open: false,
            settings,
        }
    }

    pub fn settings(&self) -> &ChromeSettings {
        &self.settings
    }

    /// Whether the toolbar is latched open.
    pub fn stay_open(&self) -> bool {
        self.stay_open
    }

    /// Recomputes visibility from the pointer state.
    pub fn tick(
        &mut self,
        pointer: &Pointer,
        window_height: f32,
        catalog_empty: bool,
        now: Instant,
    ) -> ChromeChange {
        let mut change = ChromeChange::default();
        self.stay_open = catalog_empty;

        let from_bottom = pointer.from_bottom(window_height);
        let bar_height = self.settings.toolbar_height;
        let animation = self.settings.animation;

        if self.stay_open {
            change.toolbar |= self.toolbar.set(true, animation, now);
        } else if let Some(distance) = from_bottom {
            if distance < bar_height {
                change.toolbar |= self.toolbar.set(true, animation, now);
            } else if distance > bar_height {
                change.toolbar |= self.toolbar.set(false, animation, now);
            }
        }

        if catalog_empty || !pointer.inside {
            change.strip |= self.strip.set(false, animation, now);
        } else if let Some(distance) = from_bottom {
            let threshold = window_height - self.settings.strip_height;
            if distance > threshold {
                change.strip |= self.strip.set(true, animation, now);
            } else if distance < threshold {
                change.strip |= self.strip.set(false, animation, now);
            }
        }

        if change.any() {
            tracing::trace!(
                toolbar = self.toolbar.is_shown(),
                strip = self.strip.is_shown(),
                "chrome visibility changed"
            );
        }
        change
    }

    /// Current toolbar height in pixels, following its animation.
    pub fn toolbar_extent(&self, now: Instant) -> f32 {
        self.settings.toolbar_height * self.toolbar.amount(self.settings.animation, now)
    }

    /// Current strip height in pixels, following its animation.
    pub fn strip_extent(&self, now: Instant) -> f32 {
        self.settings.strip_height * self.strip.amount(self.settings.animation, now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.toolbar.is_animating(self.settings.animation, now)
            || self.strip.is_animating(self.settings.animation, now)
    }
}
