// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers called from
//! `App::update`. Handlers receive an [`UpdateContext`] borrowing the parts
//! of the application state they may mutate.

use super::{Message, Screen};
use crate::directory_scanner::SUPPORTED_EXTENSIONS;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::image_navigation::{SelectOutcome, SelectionState};
use crate::ui::caption;
use crate::ui::state::{ChromeState, Pointer, ViewModeState, ViewTransform};
use crate::ui::viewer::SCROLLABLE_ID;
use crate::ui::{tile_strip, toolbar, viewer};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, window, Point, Size, Task};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Pixels of a high-resolution scroll counted as one wheel step.
const PIXELS_PER_WHEEL_STEP: f32 = 50.0;

/// Mutable view of the application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub selection: &'a mut SelectionState,
    pub view_mode: &'a mut ViewModeState,
    pub chrome: &'a mut ChromeState,
    pub transform: &'a mut ViewTransform,
    pub captions: &'a mut caption::Manager,
    pub pointer: &'a mut Pointer,
    pub window_size: &'a mut Size,
    pub window_id: &'a mut Option<window::Id>,
    pub fullscreen: &'a mut bool,
    pub now: &'a mut Instant,
}

/// Keyboard shortcuts understood by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Previous,
    Next,
    ToggleMode,
    ToggleFullscreen,
    ExitFullscreen,
    OpenFile,
    ResetView,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Previous,
    Next,
}

/// Maps a key press to a shortcut.
pub fn shortcut(event: &keyboard::Event) -> Option<Shortcut> {
    let keyboard::Event::KeyPressed { key, modifiers, .. } = event else {
        return None;
    };
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    match key.as_ref() {
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(Shortcut::Previous),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(Shortcut::Next),
        keyboard::Key::Named(keyboard::key::Named::F11) => Some(Shortcut::ToggleFullscreen),
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Shortcut::ExitFullscreen),
        keyboard::Key::Named(keyboard::key::Named::F5) => Some(Shortcut::Refresh),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("c") => Some(Shortcut::ToggleMode),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("o") => Some(Shortcut::OpenFile),
        keyboard::Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(Shortcut::ResetView),
        _ => None,
    }
}

/// Handles native events forwarded by the event subscription.
pub fn handle_raw_event(
    ctx: &mut UpdateContext<'_>,
    window: window::Id,
    event: event::Event,
) -> Task<Message> {
    *ctx.window_id = Some(window);

    match event {
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            ctx.pointer.position = Some((position.x, position.y));
            ctx.pointer.inside = true;
            match ctx.transform.drag_to(position, *ctx.window_size) {
                Some(offset) => snap_viewer(offset),
                None => Task::none(),
            }
        }
        event::Event::Mouse(mouse::Event::CursorEntered) => {
            ctx.pointer.inside = true;
            Task::none()
        }
        event::Event::Mouse(mouse::Event::CursorLeft) => {
            ctx.pointer.inside = false;
            Task::none()
        }
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            ctx.transform.end_drag();
            Task::none()
        }
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            *ctx.window_size = size;
            Task::none()
        }
        event::Event::Window(window::Event::FileDropped(path)) => select_path(ctx, &path),
        event::Event::Keyboard(keyboard_event) => match shortcut(&keyboard_event) {
            Some(shortcut) => handle_shortcut(ctx, shortcut),
            None => Task::none(),
        },
        _ => Task::none(),
    }
}

fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    match shortcut {
        Shortcut::Previous => navigate(ctx, Direction::Previous),
        Shortcut::Next => navigate(ctx, Direction::Next),
        Shortcut::ToggleMode => begin_mode_switch(ctx),
        Shortcut::ToggleFullscreen => toggle_fullscreen(ctx.fullscreen, ctx.window_id.as_ref()),
        Shortcut::ExitFullscreen => {
            update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), false)
        }
        Shortcut::OpenFile => open_dialog(ctx, DialogKind::File),
        Shortcut::ResetView => reset_view(ctx),
        Shortcut::Refresh => refresh_catalog(ctx),
    }
}

/// Handles toolbar button presses.
pub fn handle_toolbar_message(
    ctx: &mut UpdateContext<'_>,
    message: toolbar::Message,
) -> Task<Message> {
    match message {
        toolbar::Message::OpenFile => open_dialog(ctx, DialogKind::File),
        toolbar::Message::OpenFolder => open_dialog(ctx, DialogKind::Folder),
        toolbar::Message::ToggleFullscreen => {
            toggle_fullscreen(ctx.fullscreen, ctx.window_id.as_ref())
        }
        toolbar::Message::Previous => navigate(ctx, Direction::Previous),
        toolbar::Message::Next => navigate(ctx, Direction::Next),
        toolbar::Message::ToggleMode => begin_mode_switch(ctx),
        toolbar::Message::ResetView => reset_view(ctx),
        toolbar::Message::Refresh => refresh_catalog(ctx),
    }
}

/// Handles a click on a thumbnail.
pub fn handle_tile_message(
    ctx: &mut UpdateContext<'_>,
    message: tile_strip::Message,
) -> Task<Message> {
    let tile_strip::Message::TileSelected(tile) = message;
    if ctx.view_mode.is_loading() {
        return Task::none();
    }

    match ctx.selection.select_by_tile(tile) {
        Ok(_) => show_current(ctx),
        Err(err) => {
            tracing::warn!(%err, "thumbnail click rejected");
            ctx.captions.warning(err.i18n_key(), *ctx.now);
            Task::none()
        }
    }
}

/// Handles zoom and pan input from the image area.
pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: viewer::Message,
) -> Task<Message> {
    match message {
        viewer::Message::PanStarted => {
            if let Some((x, y)) = ctx.pointer.position {
                ctx.transform.start_drag(Point::new(x, y));
            }
            Task::none()
        }
        viewer::Message::PanEnded => {
            ctx.transform.end_drag();
            Task::none()
        }
        viewer::Message::Wheel(delta) => {
            let steps = match delta {
                mouse::ScrollDelta::Lines { y, .. } => y,
                mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_WHEEL_STEP,
            };
            match ctx.transform.zoom(steps) {
                Some(offset) => snap_viewer(offset),
                None => Task::none(),
            }
        }
    }
}

/// Advances timers: chrome visibility, captions and carousel slides.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    *ctx.now = now;

    ctx.chrome.tick(
        ctx.pointer,
        ctx.window_size.height,
        ctx.selection.is_empty(),
        now,
    );
    ctx.captions.tick(now);

    if let Some(settled) = ctx.view_mode.advance(now) {
        if let Some(index) = ctx.view_mode.on_slide_settled(settled) {
            ctx.selection.select_index(index);
        }
    }
    Task::none()
}

/// First step of a mode switch: caption, loading screen, deferred rebuild.
fn begin_mode_switch(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(transition) = ctx.view_mode.begin_toggle() else {
        return Task::none();
    };

    ctx.captions.info(transition.to.caption_key(), *ctx.now);
    *ctx.screen = Screen::Loading;
    Task::done(Message::FinishTransition)
}

/// Second step of a mode switch: rebuild the target representation.
pub fn handle_finish_transition(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.view_mode.finish(ctx.selection);
    *ctx.screen = Screen::Viewer;
    snap_viewer(ctx.transform.reset())
}

fn navigate(ctx: &mut UpdateContext<'_>, direction: Direction) -> Task<Message> {
    if ctx.view_mode.is_loading() {
        return Task::none();
    }

    let moved = match direction {
        Direction::Previous => ctx.selection.select_previous().is_some(),
        Direction::Next => ctx.selection.select_next().is_some(),
    };
    if moved {
        show_current(ctx)
    } else {
        Task::none()
    }
}

/// Points the view at the current selection with a fresh transform.
fn show_current(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.view_mode.sync(ctx.selection, *ctx.now);
    snap_viewer(ctx.transform.reset())
}

/// Opens a file or directory given on the command line, dropped on the
/// window or picked in the dialog.
pub fn select_path(ctx: &mut UpdateContext<'_>, path: &Path) -> Task<Message> {
    if ctx.view_mode.is_loading() {
        return Task::none();
    }

    match ctx.selection.select_by_path(path) {
        Ok(outcome) => {
            if outcome == SelectOutcome::CatalogRebuilt {
                tracing::info!(
                    directory = ?ctx.selection.directory(),
                    images = ctx.selection.len(),
                    "opened directory"
                );
                if ctx.selection.is_empty() {
                    ctx.captions.info("caption-empty-directory", *ctx.now);
                }
            }
            show_current(ctx)
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "cannot open path");
            ctx.captions.warning(err.i18n_key(), *ctx.now);
            Task::none()
        }
    }
}

/// Rescans the active directory so files added or removed on disk show up
/// in the thumbnails. A directory that disappeared leaves an empty catalog.
fn refresh_catalog(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.view_mode.is_loading() {
        return Task::none();
    }
    let Some(directory) = ctx.selection.directory().map(Path::to_path_buf) else {
        return Task::none();
    };

    let result = match ctx.selection.rebuild() {
        Err(Error::DirectoryNotFound(_)) => ctx.selection.open_directory(&directory),
        other => other,
    };

    match result {
        Ok(()) if ctx.selection.is_empty() => {
            ctx.captions.info("caption-empty-directory", *ctx.now);
        }
        Ok(()) => {
            tracing::info!(images = ctx.selection.len(), "catalog refreshed");
            ctx.captions.info("caption-catalog-refreshed", *ctx.now);
        }
        Err(err) => {
            tracing::warn!(directory = %directory.display(), %err, "cannot refresh catalog");
            ctx.captions.warning(err.i18n_key(), *ctx.now);
        }
    }
    show_current(ctx)
}

/// Handles the result of the open dialog.
pub fn handle_open_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        // User cancelled the dialog
        return Task::none();
    };
    select_path(ctx, &path)
}

fn reset_view(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let offset = ctx.transform.reset();
    ctx.captions.info("caption-view-reset", *ctx.now);
    snap_viewer(offset)
}

fn snap_viewer(offset: RelativeOffset) -> Task<Message> {
    operation::snap_to(Id::new(SCROLLABLE_ID), offset)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DialogKind {
    File,
    Folder,
}

/// Opens the native picker in the active directory, or the working
/// directory when nothing is open yet.
fn open_dialog(ctx: &mut UpdateContext<'_>, kind: DialogKind) -> Task<Message> {
    let start_directory = ctx
        .selection
        .directory()
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok());
    let filter_name = ctx.i18n.tr("dialog-filter-images");

    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();
            if let Some(dir) = start_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            let handle = match kind {
                DialogKind::File => {
                    dialog
                        .add_filter(filter_name, SUPPORTED_EXTENSIONS)
                        .pick_file()
                        .await
                }
                DialogKind::Folder => dialog.pick_folder().await,
            };
            handle.map(|h| h.path().to_path_buf())
        },
        Message::OpenDialogResult,
    )
}

/// Toggles fullscreen mode.
fn toggle_fullscreen(fullscreen: &mut bool, window_id: Option<&window::Id>) -> Task<Message> {
    let desired = !*fullscreen;
    update_fullscreen_mode(fullscreen, window_id, desired)
}

/// Updates fullscreen mode to the desired state.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    tracing::debug!(?mode, "changing window mode");
    window::set_mode(*window_id, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChromeSettings;
    use crate::ui::state::Mode;
    use keyboard::key::Named;
    use keyboard::{Key, Modifiers};
    use std::fs;
    use std::time::Duration;
    use tempfile::{tempdir, TempDir};

    struct Harness {
        i18n: I18n,
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
        now: Instant,
    }

    impl Harness {
        fn new(mode: Mode) -> Self {
            let selection = SelectionState::new();
            Self {
                i18n: I18n::default(),
                screen: Screen::Viewer,
                view_mode: ViewModeState::new(mode, &selection, Duration::from_millis(200)),
                selection,
                chrome: ChromeState::new(ChromeSettings::default()),
                transform: ViewTransform::default(),
                captions: caption::Manager::new(Duration::from_secs(1), true),
                pointer: Pointer::default(),
                window_size: Size::new(800.0, 600.0),
                window_id: None,
                fullscreen: false,
                now: Instant::now(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
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
            }
        }
    }

    fn gallery(names: &[&str]) -> TempDir {
        let temp_dir = tempdir().expect("failed to create temp dir");
        for name in names {
            fs::write(temp_dir.path().join(name), b"fake image data").expect("write image");
        }
        temp_dir
    }

    fn press(key: Key) -> keyboard::Event {
        keyboard::Event::KeyPressed {
            key: key.clone(),
            modified_key: key.clone(),
            physical_key: keyboard::key::Physical::Code(keyboard::key::Code::KeyA),
            location: keyboard::Location::Standard,
            modifiers: Modifiers::default(),
            text: None,
            repeat: false,
        }
    }

    #[test]
    fn shortcuts_map_expected_keys() {
        assert_eq!(
            shortcut(&press(Key::Named(Named::ArrowLeft))),
            Some(Shortcut::Previous)
        );
        assert_eq!(
            shortcut(&press(Key::Named(Named::ArrowRight))),
            Some(Shortcut::Next)
        );
        assert_eq!(
            shortcut(&press(Key::Named(Named::F11))),
            Some(Shortcut::ToggleFullscreen)
        );
        assert_eq!(
            shortcut(&press(Key::Character("C".into()))),
            Some(Shortcut::ToggleMode)
        );
        assert_eq!(
            shortcut(&press(Key::Character("r".into()))),
            Some(Shortcut::ResetView)
        );
        assert_eq!(
            shortcut(&press(Key::Named(Named::F5))),
            Some(Shortcut::Refresh)
        );
        assert_eq!(shortcut(&press(Key::Character("x".into()))), None);
    }

    #[test]
    fn select_path_opens_directory_and_shows_first_image() {
        let dir = gallery(&["b.png", "a.png"]);
        let mut harness = Harness::new(Mode::Simple);

        let _ = select_path(&mut harness.ctx(), dir.path());

        assert_eq!(harness.selection.len(), 2);
        assert_eq!(
            harness.view_mode.displayed_path(),
            Some(dir.path().join("a.png").as_path())
        );
    }

    #[test]
    fn select_missing_path_shows_warning_caption() {
        let dir = gallery(&[]);
        let mut harness = Harness::new(Mode::Simple);

        let _ = select_path(&mut harness.ctx(), &dir.path().join("nope.png"));

        let caption = harness.captions.current().expect("warning caption");
        assert_eq!(caption.message_key(), "caption-directory-not-found");
        assert!(harness.selection.is_empty());
    }

    #[test]
    fn navigation_is_ignored_while_switching_mode() {
        let dir = gallery(&["a.png", "b.png"]);
        let mut harness = Harness::new(Mode::Simple);
        let _ = select_path(&mut harness.ctx(), dir.path());

        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::ToggleMode);
        assert_eq!(harness.screen, Screen::Loading);
        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::Next);
        assert_eq!(harness.selection.current_index(), Some(0));

        let _ = handle_finish_transition(&mut harness.ctx());
        assert_eq!(harness.screen, Screen::Viewer);
        assert_eq!(harness.view_mode.mode(), Mode::Carousel);

        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::Next);
        assert_eq!(harness.selection.current_index(), Some(1));
    }

    #[test]
    fn mode_switch_announces_target_mode() {
        let mut harness = Harness::new(Mode::Simple);
        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::ToggleMode);

        let caption = harness.captions.current().expect("caption");
        assert_eq!(caption.message_key(), "caption-carousel-view");
    }

    #[test]
    fn stale_tile_click_is_reported() {
        let dir = gallery(&["a.png", "b.png"]);
        let mut harness = Harness::new(Mode::Simple);
        let _ = select_path(&mut harness.ctx(), dir.path());
        let (tile, _) = harness.selection.tiles().nth(1).expect("tile");
        harness.selection.rebuild().expect("rebuild");

        let _ = handle_tile_message(&mut harness.ctx(), tile_strip::Message::TileSelected(tile));

        assert_eq!(harness.selection.current_index(), Some(0));
        let caption = harness.captions.current().expect("caption");
        assert_eq!(caption.message_key(), "caption-stale-tile");
    }

    #[test]
    fn refresh_picks_up_new_files_and_keeps_selection() {
        let dir = gallery(&["a.png", "c.png"]);
        let mut harness = Harness::new(Mode::Carousel);
        let _ = select_path(&mut harness.ctx(), &dir.path().join("c.png"));
        let (stale, _) = harness.selection.tiles().next().expect("tile");

        fs::write(dir.path().join("b.png"), b"fake image data").expect("write image");
        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::Refresh);

        assert_eq!(harness.selection.len(), 3);
        assert_eq!(harness.selection.current_index(), Some(2));
        assert_eq!(
            harness.view_mode.displayed_path(),
            Some(dir.path().join("c.png").as_path())
        );
        assert!(harness.selection.select_by_tile(stale).is_err());
        let caption = harness.captions.current().expect("caption");
        assert_eq!(caption.message_key(), "caption-catalog-refreshed");
    }

    #[test]
    fn refresh_of_removed_directory_empties_catalog() {
        let parent = tempdir().expect("failed to create temp dir");
        let photos = parent.path().join("photos");
        fs::create_dir(&photos).expect("create dir");
        fs::write(photos.join("a.png"), b"fake image data").expect("write image");

        let mut harness = Harness::new(Mode::Simple);
        let _ = select_path(&mut harness.ctx(), &photos);
        assert_eq!(harness.selection.len(), 1);

        fs::remove_dir_all(&photos).expect("remove dir");
        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::Refresh);

        assert!(harness.selection.is_empty());
        assert_eq!(harness.selection.current_index(), None);
        assert_eq!(harness.view_mode.displayed_path(), None);
        let caption = harness.captions.current().expect("warning caption");
        assert_eq!(caption.message_key(), "caption-directory-not-found");
    }

    #[test]
    fn refresh_without_directory_does_nothing() {
        let mut harness = Harness::new(Mode::Simple);
        let generation = harness.selection.generation();

        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::Refresh);

        assert_eq!(harness.selection.generation(), generation);
        assert!(harness.captions.current().is_none());
    }

    #[test]
    fn tick_latches_toolbar_for_empty_catalog() {
        let mut harness = Harness::new(Mode::Simple);
        harness.pointer = Pointer {
            position: Some((10.0, 10.0)),
            inside: true,
        };
        let now = harness.now + Duration::from_millis(100);

        let _ = handle_tick(&mut harness.ctx(), now);

        assert!(harness.chrome.toolbar.is_shown());
        assert!(!harness.chrome.strip.is_shown());
        assert_eq!(harness.now, now);
    }

    #[test]
    fn reset_view_restores_transform_and_captions() {
        let mut harness = Harness::new(Mode::Simple);
        harness.transform.zoom(3.0);

        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::ResetView);

        assert!(harness.transform.is_identity());
        let caption = harness.captions.current().expect("caption");
        assert_eq!(caption.message_key(), "caption-view-reset");
    }

    #[test]
    fn fullscreen_needs_a_known_window() {
        let mut harness = Harness::new(Mode::Simple);
        let _ = handle_toolbar_message(&mut harness.ctx(), toolbar::Message::ToggleFullscreen);
        assert!(!harness.fullscreen);
    }
}
