// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the viewer state logic separated from the main App
//! struct, so it can be tested without a window.

pub mod animation;
pub mod chrome;
pub mod transform;
pub mod view_mode;

// Re-export commonly used types for convenience
pub use chrome::{ChromeChange, ChromeState, Pointer, Reveal};
pub use transform::{Scale, ViewTransform};
pub use view_mode::{Mode, Phase, Transition, ViewModeState};
