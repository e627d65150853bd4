// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Views
//!
//! - [`viewer`] - Image area for the simple and carousel modes, with zoom and pan
//! - [`toolbar`] - Auto-hiding bottom toolbar
//! - [`tile_strip`] - Auto-hiding thumbnail strip
//! - [`caption`] - Transient fading captions
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Window-independent state (view mode, chrome, transform)
//! - [`styles`] - Centralized styling (buttons, overlay bands)
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod caption;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
pub mod tile_strip;
pub mod toolbar;
pub mod viewer;
