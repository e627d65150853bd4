// SPDX-License-Identifier: MPL-2.0
//! View mode state: single image or animated carousel.
//!
//! Switching mode is a two-step operation. [`ViewModeState::begin_toggle`]
//! enters the `Loading` phase so the shell can show the loading screen and a
//! caption, then [`ViewModeState::finish`] rebuilds the new representation
//! from the selection on the next message. While loading, carousel
//! notifications and navigation are ignored.

use super::animation::{ease_out_quad, progress};
use crate::image_navigation::SelectionState;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Which representation of the catalog is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Simple,
    Carousel,
}

impl Mode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Simple => Mode::Carousel,
            Mode::Carousel => Mode::Simple,
        }
    }

    /// i18n key of the caption announcing this mode.
    #[must_use]
    pub fn caption_key(self) -> &'static str {
        match self {
            Mode::Simple => "caption-simple-view",
            Mode::Carousel => "caption-carousel-view",
        }
    }
}

/// A pending mode switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Ready,
    Loading(Transition),
}

/// Slide animation toward `Carousel::index`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SlideAnimation {
    from: usize,
    started: Instant,
}

#[derive(Debug, Clone, PartialEq)]
struct Carousel {
    slides: Vec<PathBuf>,
    index: usize,
    generation: u64,
    animation: Option<SlideAnimation>,
}

#[derive(Debug, Clone, PartialEq)]
enum Representation {
    Simple { path: Option<PathBuf> },
    Carousel(Carousel),
}

/// What the carousel should draw at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselFrame<'a> {
    /// Slide fading out, with its opacity.
    pub outgoing: Option<(&'a Path, f32)>,
    /// Slide fading in (or fully shown), with its opacity.
    pub incoming: (&'a Path, f32),
    /// Neighbors kept loaded so the next slide appears without delay.
    pub preload: Vec<&'a Path>,
}

/// Controller for the simple/carousel view switch.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModeState {
    mode: Mode,
    phase: Phase,
    representation: Representation,
    slide_duration: Duration,
}

impl ViewModeState {
    /// Creates a controller in `mode`, bound to the current selection.
    pub fn new(mode: Mode, selection: &SelectionState, slide_duration: Duration) -> Self {
        let mut state = Self {
            mode,
            phase: Phase::Ready,
            representation: Representation::Simple { path: None },
            slide_duration,
        };
        state.representation = state.build(selection);
        state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    /// Starts a mode switch. Refused while a switch is already loading.
    pub fn begin_toggle(&mut self) -> Option<Transition> {
        if self.is_loading() {
            return None;
        }
        let transition = Transition {
            from: self.mode,
            to: self.mode.toggled(),
        };
        tracing::debug!(?transition.from, ?transition.to, "view mode switch requested");
        self.phase = Phase::Loading(transition);
        Some(transition)
    }

    /// Completes a pending switch by rebuilding the target representation.
    ///
    /// Returns the mode now active, or `None` if no switch was pending.
    pub fn finish(&mut self, selection: &SelectionState) -> Option<Mode> {
        let Phase::Loading(transition) = self.phase else {
            return None;
        };
        self.mode = transition.to;
        self.representation = self.build(selection);
        self.phase = Phase::Ready;
        tracing::info!(mode = ?self.mode, "view mode changed");
        Some(self.mode)
    }

    /// Carousel notification that a slide finished animating in.
    ///
    /// Returns the index the selection should adopt; ignored while loading
    /// or outside carousel mode.
    pub fn on_slide_settled(&mut self, index: usize) -> Option<usize> {
        if self.is_loading() {
            tracing::trace!(index, "slide settled during view switch, ignored");
            return None;
        }
        match &mut self.representation {
            Representation::Carousel(carousel) if index < carousel.slides.len() => {
                carousel.index = index;
                Some(index)
            }
            _ => None,
        }
    }

    /// Points the active representation at the current selection.
    ///
    /// A new catalog rebuilds the carousel slides; an index change starts a
    /// slide animation. Ignored while loading since `finish` rebuilds anyway.
    pub fn sync(&mut self, selection: &SelectionState, now: Instant) {
        if self.is_loading() {
            return;
        }
        match &mut self.representation {
            Representation::Simple { path } => {
                *path = selection.current_path().map(Path::to_path_buf);
            }
            Representation::Carousel(carousel) => {
                if carousel.generation != selection.generation() {
                    self.representation = self.build(selection);
                    return;
                }
                let Some(target) = selection.current_index() else {
                    return;
                };
                if target != carousel.index {
                    carousel.animation = Some(SlideAnimation {
                        from: carousel.index,
                        started: now,
                    });
                    carousel.index = target;
                }
            }
        }
    }

    /// Advances the slide animation. Returns the settled index when an
    /// animation completes at `now`.
    pub fn advance(&mut self, now: Instant) -> Option<usize> {
        let Representation::Carousel(carousel) = &mut self.representation else {
            return None;
        };
        let animation = carousel.animation?;
        if progress(animation.started, self.slide_duration, now) < 1.0 {
            return None;
        }
        carousel.animation = None;
        Some(carousel.index)
    }

    /// Whether a slide animation is running and needs redraws.
    pub fn is_animating(&self) -> bool {
        matches!(
            &self.representation,
            Representation::Carousel(Carousel {
                animation: Some(_),
                ..
            })
        )
    }

    /// The path currently visible (the animation target in carousel mode).
    pub fn displayed_path(&self) -> Option<&Path> {
        match &self.representation {
            Representation::Simple { path } => path.as_deref(),
            Representation::Carousel(carousel) => {
                carousel.slides.get(carousel.index).map(PathBuf::as_path)
            }
        }
    }

    /// Carousel rendering state at `now`; `None` in simple mode or with no
    /// slides.
    pub fn carousel_frame(&self, now: Instant) -> Option<CarouselFrame<'_>> {
        let Representation::Carousel(carousel) = &self.representation else {
            return None;
        };
        let incoming = carousel.slides.get(carousel.index)?;

        let (outgoing, opacity) = match carousel.animation {
            Some(animation) => {
                let eased = ease_out_quad(progress(animation.started, self.slide_duration, now));
                let outgoing = carousel
                    .slides
                    .get(animation.from)
                    .map(|path| (path.as_path(), 1.0 - eased));
                (outgoing, eased)
            }
            None => (None, 1.0),
        };

        let preload = [carousel.index.checked_sub(1), Some(carousel.index + 1)]
            .into_iter()
            .flatten()
            .filter_map(|i| carousel.slides.get(i))
            .map(PathBuf::as_path)
            .collect();

        Some(CarouselFrame {
            outgoing,
            incoming: (incoming.as_path(), opacity),
            preload,
        })
    }

    fn build(&self, selection: &SelectionState) -> Representation {
        match self.mode {
            Mode::Simple => Representation::Simple {
                path: selection.current_path().map(Path::to_path_buf),
            },
            Mode::Carousel => Representation::Carousel(Carousel {
                slides: selection.images().iter().map(Path::to_path_buf).collect(),
                index: selection.current_index().unwrap_or(0),
                generation: selection.generation(),
                animation: None,
            }),
        }
    }
}
