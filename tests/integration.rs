// SPDX-License-Identifier: MPL-2.0
use iced_slides::config::{self, ChromeSettings};
use iced_slides::directory_scanner::ImageList;
use iced_slides::error::Error;
use iced_slides::i18n::fluent::I18n;
use iced_slides::image_navigation::SelectionState;
use iced_slides::ui::state::{ChromeState, Mode, Pointer, ViewModeState};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn write_images(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"fake image data").expect("failed to write test file");
    }
}

#[test]
fn scan_sorts_and_filters_directory() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_images(dir.path(), &["c.jpg", "a.png", "b.gif", "readme.md"]);

    let list = ImageList::scan(dir.path()).expect("scan should succeed");
    let names: Vec<_> = list
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, ["a.png", "b.gif", "c.jpg"]);
}

#[test]
fn browsing_session_survives_mode_switches() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_images(dir.path(), &["a.png", "b.png", "c.png"]);

    let mut selection = SelectionState::new();
    selection
        .select_by_path(&dir.path().join("b.png"))
        .expect("selecting an existing file should succeed");
    assert_eq!(selection.current_index(), Some(1));

    let start = Instant::now();
    let mut view_mode = ViewModeState::new(Mode::Simple, &selection, Duration::from_millis(200));

    // Simple -> Carousel
    view_mode.begin_toggle().expect("toggle should start");
    assert!(view_mode.is_loading());
    assert_eq!(view_mode.on_slide_settled(0), None);
    assert_eq!(view_mode.finish(&selection), Some(Mode::Carousel));
    assert_eq!(
        view_mode.displayed_path(),
        Some(dir.path().join("b.png").as_path())
    );

    // Navigate inside the carousel and let the slide settle.
    selection.select_next();
    view_mode.sync(&selection, start);
    assert!(view_mode.is_animating());
    let settled = view_mode
        .advance(start + Duration::from_millis(250))
        .expect("slide should settle");
    assert_eq!(view_mode.on_slide_settled(settled), Some(2));

    // Carousel -> Simple
    view_mode.begin_toggle().expect("toggle should start");
    assert_eq!(view_mode.finish(&selection), Some(Mode::Simple));
    assert_eq!(selection.current_index(), Some(2));
    assert_eq!(
        view_mode.displayed_path(),
        Some(dir.path().join("c.png").as_path())
    );
}

#[test]
fn stale_tiles_are_rejected_after_rebuild() {
    let dir = tempdir().expect("Failed to create temporary directory");
    write_images(dir.path(), &["a.png", "b.png"]);

    let mut selection = SelectionState::new();
    selection.open_directory(dir.path()).expect("open directory");
    let (tile, _) = selection.tiles().last().expect("a tile");

    write_images(dir.path(), &["c.png"]);
    selection.rebuild().expect("rebuild");

    assert!(matches!(
        selection.select_by_tile(tile),
        Err(Error::StaleTileReference { .. })
    ));
    assert_eq!(selection.len(), 3);
}

#[test]
fn empty_directory_latches_toolbar_open() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut selection = SelectionState::new();
    selection.open_directory(dir.path()).expect("open directory");
    assert!(selection.is_empty());

    let mut chrome = ChromeState::new(ChromeSettings::default());
    let pointer = Pointer {
        position: Some((400.0, 10.0)),
        inside: true,
    };
    let now = Instant::now();
    chrome.tick(&pointer, 600.0, selection.is_empty(), now);

    assert!(chrome.stay_open());
    assert!(chrome.toolbar.is_shown());
    assert!(!chrome.strip.is_shown());
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(&config_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("caption-view-reset"), "Vue réinitialisée");
}
