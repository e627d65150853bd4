// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Chrome**: Toolbar and thumbnail strip geometry, polling and animation
//! - **Captions**: Transient caption fade timing
//! - **Zoom**: Scale bounds of the displayed image

// ==========================================================================
// Chrome Defaults
// ==========================================================================

/// Default height of the bottom toolbar (logical pixels).
pub const DEFAULT_TOOLBAR_HEIGHT: f32 = 50.0;

/// Minimum toolbar height.
pub const MIN_TOOLBAR_HEIGHT: f32 = 24.0;

/// Maximum toolbar height.
pub const MAX_TOOLBAR_HEIGHT: f32 = 160.0;

/// Default height of the top thumbnail strip (logical pixels).
pub const DEFAULT_STRIP_HEIGHT: f32 = 100.0;

/// Minimum thumbnail strip height.
pub const MIN_STRIP_HEIGHT: f32 = 48.0;

/// Maximum thumbnail strip height.
pub const MAX_STRIP_HEIGHT: f32 = 320.0;

/// Default chrome poll period (milliseconds).
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Minimum chrome poll period.
pub const MIN_POLL_INTERVAL_MS: u64 = 16;

/// Maximum chrome poll period.
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

/// Default duration of show/hide and slide animations (milliseconds).
pub const DEFAULT_ANIMATION_MS: u64 = 200;

/// Maximum animation duration. Zero disables animations.
pub const MAX_ANIMATION_MS: u64 = 2000;

// ==========================================================================
// Caption Defaults
// ==========================================================================

/// Duration of each caption phase (fade in, then fade out).
pub const DEFAULT_CAPTION_FADE_MS: u64 = 1000;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale of a freshly displayed image (fit to window).
pub const DEFAULT_SCALE: f32 = 1.0;

/// Minimum allowed scale.
pub const MIN_SCALE: f32 = 0.1;

/// Maximum allowed scale.
pub const MAX_SCALE: f32 = 8.0;

/// Multiplicative scale step per wheel notch.
pub const SCALE_STEP: f32 = 1.1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOOLBAR_HEIGHT > 0.0);
    assert!(DEFAULT_TOOLBAR_HEIGHT >= MIN_TOOLBAR_HEIGHT);
    assert!(DEFAULT_TOOLBAR_HEIGHT <= MAX_TOOLBAR_HEIGHT);

    assert!(MIN_STRIP_HEIGHT > 0.0);
    assert!(DEFAULT_STRIP_HEIGHT >= MIN_STRIP_HEIGHT);
    assert!(DEFAULT_STRIP_HEIGHT <= MAX_STRIP_HEIGHT);

    assert!(MIN_POLL_INTERVAL_MS > 0);
    assert!(DEFAULT_POLL_INTERVAL_MS >= MIN_POLL_INTERVAL_MS);
    assert!(DEFAULT_POLL_INTERVAL_MS <= MAX_POLL_INTERVAL_MS);

    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_CAPTION_FADE_MS > 0);

    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(SCALE_STEP > 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_defaults_match_classic_layout() {
        assert_eq!(DEFAULT_TOOLBAR_HEIGHT, 50.0);
        assert_eq!(DEFAULT_STRIP_HEIGHT, 100.0);
        assert_eq!(DEFAULT_POLL_INTERVAL_MS, 100);
        assert_eq!(DEFAULT_ANIMATION_MS, 200);
    }

    #[test]
    fn scale_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE, 1.0);
        assert!(MIN_SCALE < DEFAULT_SCALE);
        assert!(MAX_SCALE > DEFAULT_SCALE);
    }
}
