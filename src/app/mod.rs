// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the catalog, the view
//! mode controller and the auto-hiding chrome.
//!
//! The `App` struct owns every piece of state and translates messages into
//! state changes and side effects like dialogs or window mode changes. The
//! handlers themselves live in `update`; this file wires them together.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;
pub use update::{shortcut, Shortcut};

use crate::config::{self, ChromeSettings};
use crate::i18n::fluent::I18n;
use crate::image_navigation::SelectionState;
use crate::ui::caption;
use crate::ui::state::{ChromeState, Mode, Pointer, ViewModeState, ViewTransform};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    selection: SelectionState,
    view_mode: ViewModeState,
    chrome: ChromeState,
    transform: ViewTransform,
    captions: caption::Manager,
    pointer: Pointer,
    window_size: Size,
    window_id: Option<window::Id>,
    fullscreen: bool,
    theme_mode: ThemeMode,
    /// Time of the latest tick; every animation is evaluated against it.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("mode", &self.view_mode.mode())
            .field("images", &self.selection.len())
            .field("current", &self.selection.current_index())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are only consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let selection = SelectionState::new();
        let settings = ChromeSettings::default();
        Self {
            i18n: I18n::default(),
            screen: Screen::Viewer,
            view_mode: ViewModeState::new(Mode::Simple, &selection, settings.animation),
            selection,
            chrome: ChromeState::new(settings),
            transform: ViewTransform::default(),
            captions: caption::Manager::new(
                Duration::from_millis(config::DEFAULT_CAPTION_FADE_MS),
                true,
            ),
            pointer: Pointer::default(),
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            window_id: None,
            fullscreen: false,
            theme_mode: ThemeMode::System,
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state and opens the image or directory given
    /// on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let settings = config.chrome.resolve();
        let mode = match flags.carousel.or(config.viewer.start_in_carousel) {
            Some(true) => Mode::Carousel,
            Some(false) | None => Mode::Simple,
        };

        let mut app = App {
            i18n: I18n::new(flags.lang.clone(), &config),
            chrome: ChromeState::new(settings),
            captions: caption::Manager::new(
                Duration::from_millis(config::DEFAULT_CAPTION_FADE_MS),
                config.viewer.captions.unwrap_or(true),
            ),
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };
        app.view_mode = ViewModeState::new(mode, &app.selection, settings.animation);

        if let Some(preload) = &flags.preload {
            tracing::info!(preload = %preload, "preload hint ignored");
        }

        if let Some(key) = config_warning {
            tracing::warn!(key = %key, "configuration could not be loaded, using defaults");
            app.captions.warning(key, app.now);
        }

        let task = match flags.image {
            Some(path) => app.update(Message::OpenDialogResult(Some(path))),
            None => Task::none(),
        };

        tracing::info!(?mode, images = app.selection.len(), "viewer ready");
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        let file_name = self
            .view_mode
            .displayed_path()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn is_animating(&self) -> bool {
        self.chrome.is_animating(self.now)
            || self.view_mode.is_animating()
            || self.captions.is_active()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.chrome.settings().poll_interval);
        let animation_sub = subscription::create_animation_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub, animation_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            selection: &mut self.selection,
            view_mode: &mut self.view_mode,
            chrome: &mut self.chrome,
            transform: &mut self.transform,
            captions: &mut self.captions,
            pointer: &mut self.pointer,
            window_size: &mut self.window_size,
            window_id: &mut self.window_id,
            fullscreen: &mut self.fullscreen,
            now: &mut self.now,
        };

        match message {
            Message::Toolbar(toolbar_message) => {
                update::handle_toolbar_message(&mut ctx, toolbar_message)
            }
            Message::TileStrip(tile_message) => update::handle_tile_message(&mut ctx, tile_message),
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::RawEvent { window, event } => {
                update::handle_raw_event(&mut ctx, window, event)
            }
            Message::FinishTransition => update::handle_finish_transition(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
            Message::OpenDialogResult(path) => update::handle_open_dialog_result(&mut ctx, path),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            selection: &self.selection,
            view_mode: &self.view_mode,
            chrome: &self.chrome,
            transform: &self.transform,
            captions: &self.captions,
            window_size: self.window_size,
            fullscreen: self.fullscreen,
            surface: self.theme_mode.viewer_surface(),
            now: self.now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toolbar;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    #[test]
    fn new_starts_in_viewer_without_image() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.screen, Screen::Viewer);
            assert!(app.selection.is_empty());
            assert_eq!(app.view_mode.mode(), Mode::Simple);
        });
    }

    #[test]
    fn carousel_flag_overrides_config() {
        with_temp_config_dir(|dir| {
            fs::write(
                dir.join("settings.toml"),
                "[viewer]\nstart_in_carousel = false\n",
            )
            .expect("write config");

            let (app, _task) = App::new(Flags {
                carousel: Some(true),
                ..Flags::default()
            });
            assert_eq!(app.view_mode.mode(), Mode::Carousel);
        });
    }

    #[test]
    fn invalid_config_shows_warning_caption() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join("settings.toml"), "not = [valid").expect("write config");

            let (app, _task) = App::new(Flags::default());
            let caption = app.captions.current().expect("warning caption");
            assert_eq!(caption.message_key(), "caption-config-error");
        });
    }

    #[test]
    fn image_flag_opens_its_directory() {
        with_temp_config_dir(|_| {
            let gallery = tempdir().expect("gallery dir");
            for name in ["b.jpg", "a.png", "notes.txt"] {
                fs::write(gallery.path().join(name), b"data").expect("write file");
            }

            let (app, _task) = App::new(Flags {
                image: Some(gallery.path().join("b.jpg")),
                ..Flags::default()
            });
            assert_eq!(app.selection.len(), 2);
            assert_eq!(app.selection.current_index(), Some(1));
        });
    }

    #[test]
    fn title_shows_app_name_when_nothing_displayed() {
        let app = App::default();
        assert_eq!(app.title(), "IcedSlides");
    }

    #[test]
    fn title_shows_displayed_file_name() {
        let gallery = tempdir().expect("gallery dir");
        fs::write(gallery.path().join("beach.png"), b"data").expect("write file");

        let mut app = App::default();
        let _ = app.update(Message::OpenDialogResult(Some(gallery.path().to_path_buf())));

        assert_eq!(app.title(), "beach.png - IcedSlides");
    }

    #[test]
    fn mode_toggle_round_trip_keeps_selection() {
        let gallery = tempdir().expect("gallery dir");
        for name in ["a.png", "b.png", "c.png"] {
            fs::write(gallery.path().join(name), b"data").expect("write file");
        }

        let mut app = App::default();
        let _ = app.update(Message::OpenDialogResult(Some(gallery.path().join("b.png"))));
        let before = app.view_mode.displayed_path().map(|p| p.to_path_buf());

        for _ in 0..2 {
            let _ = app.update(Message::Toolbar(toolbar::Message::ToggleMode));
            assert_eq!(app.screen, Screen::Loading);
            let _ = app.update(Message::FinishTransition);
            assert_eq!(app.screen, Screen::Viewer);
        }

        assert_eq!(app.view_mode.mode(), Mode::Simple);
        assert_eq!(app.selection.current_index(), Some(1));
        assert_eq!(app.view_mode.displayed_path().map(|p| p.to_path_buf()), before);
    }

    #[test]
    fn view_builds_for_each_screen() {
        let mut app = App::default();
        let _ = app.view();
        app.screen = Screen::Loading;
        let _ = app.view();
    }
}
