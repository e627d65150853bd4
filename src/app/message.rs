// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{tile_strip, toolbar, viewer};
use iced::{window, Event};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(toolbar::Message),
    TileStrip(tile_strip::Message),
    Viewer(viewer::Message),
    /// Native keyboard, mouse and window events.
    RawEvent {
        window: window::Id,
        event: Event,
    },
    /// Second step of a view mode switch, dispatched after the loading
    /// screen was requested.
    FinishTransition,
    /// Periodic chrome poll and animation frames.
    Tick(Instant),
    /// Result from the open file/folder dialog.
    OpenDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image file or directory to open on startup.
    pub image: Option<PathBuf>,
    /// Start in carousel (`true`) or simple (`false`) mode; falls back to
    /// the config file when unset.
    pub carousel: Option<bool>,
    /// Preload hint accepted for compatibility; only logged.
    pub preload: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SLIDES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
