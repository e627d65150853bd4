// SPDX-License-Identifier: MPL-2.0
//! Image navigation module for managing the image catalog and the selection.
//!
//! [`SelectionState`] is the single source of truth for which image is
//! current. It owns the [`ImageList`] of the active directory, the selected
//! index, and a catalog generation counter used to validate thumbnail tile
//! references handed out to the view.

use crate::directory_scanner::ImageList;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Navigation state information for UI rendering.
///
/// A snapshot of the selection so the toolbar can enable or disable its
/// buttons without borrowing the catalog.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationInfo {
    /// Whether there is a next image to navigate to.
    pub has_next: bool,
    /// Whether there is a previous image to navigate to.
    pub has_previous: bool,
    /// Whether the current image is the first in the list.
    pub at_first: bool,
    /// Whether the current image is the last in the list.
    pub at_last: bool,
    /// Current position in the list (0-indexed), if set.
    pub current_index: Option<usize>,
    /// Total number of images in the list.
    pub total_count: usize,
}

/// Handle to a thumbnail tile, only valid for the catalog generation that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRef {
    pub generation: u64,
    pub index: usize,
}

/// What a selection request changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Only the current index moved; existing tiles stay valid.
    IndexMoved,
    /// The catalog was replaced; tiles must be regenerated.
    CatalogRebuilt,
}

/// Catalog of the active directory plus the selected image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    images: ImageList,
    current: Option<usize>,
    directory: Option<PathBuf>,
    generation: u64,
}

impl SelectionState {
    /// Creates an empty selection with no active directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalog with a scan of `directory` and selects its first
    /// image.
    ///
    /// A missing directory installs an empty catalog before the error is
    /// returned, so the caller only has to report it.
    pub fn open_directory(&mut self, directory: &Path) -> Result<()> {
        let directory = absolute(directory);
        match ImageList::scan(&directory) {
            Ok(images) => {
                let current = if images.is_empty() { None } else { Some(0) };
                self.install(images, Some(directory), current);
                Ok(())
            }
            Err(err @ Error::DirectoryNotFound(_)) => {
                tracing::warn!(%err, "installing an empty catalog");
                self.install(ImageList::new(), None, None);
                Err(err)
            }
            Err(err) => Err(err),
        }
    }

    /// Selects `path`, rescanning the catalog when the path lives outside it.
    ///
    /// - a path already in the catalog only moves the index;
    /// - a directory is scanned and its first image selected;
    /// - a file outside the catalog triggers a scan of its parent directory;
    ///   if the file is still not listed (unsupported extension) it is
    ///   appended, then selected;
    /// - a missing path fails with [`Error::DirectoryNotFound`] and leaves
    ///   the state untouched.
    pub fn select_by_path(&mut self, path: &Path) -> Result<SelectOutcome> {
        let path = absolute(path);

        if let Some(index) = self.images.position(&path) {
            self.current = Some(index);
            return Ok(SelectOutcome::IndexMoved);
        }

        if path.is_dir() {
            self.open_directory(&path)?;
            return Ok(SelectOutcome::CatalogRebuilt);
        }

        if path.is_file() {
            let parent = path
                .parent()
                .map(Path::to_path_buf)
                .ok_or_else(|| Error::DirectoryNotFound(path.clone()))?;
            let mut images = ImageList::scan(&parent)?;
            let index = images.push(path);
            self.install(images, Some(parent), Some(index));
            return Ok(SelectOutcome::CatalogRebuilt);
        }

        Err(Error::DirectoryNotFound(path))
    }

    /// Resolves a thumbnail tile to its catalog position and selects it.
    pub fn select_by_tile(&mut self, tile: TileRef) -> Result<usize> {
        if tile.generation != self.generation || tile.index >= self.images.len() {
            return Err(Error::StaleTileReference {
                generation: tile.generation,
                current: self.generation,
            });
        }
        self.current = Some(tile.index);
        Ok(tile.index)
    }

    /// Selects the image at `index`. Out-of-range indices are ignored.
    pub fn select_index(&mut self, index: usize) -> Option<&Path> {
        let path = self.images.get(index)?;
        self.current = Some(index);
        Some(path)
    }

    /// Advances to the next image. No-op at the end of the list.
    pub fn select_next(&mut self) -> Option<&Path> {
        let next = self.current? + 1;
        self.select_index(next)
    }

    /// Goes back to the previous image. No-op at the start of the list.
    pub fn select_previous(&mut self) -> Option<&Path> {
        let previous = self.current?.checked_sub(1)?;
        self.select_index(previous)
    }

    /// Rescans the active directory.
    ///
    /// The selected path is kept when it still exists, otherwise the previous
    /// index is clamped into the new range. On error the state is unchanged.
    pub fn rebuild(&mut self) -> Result<()> {
        let Some(directory) = self.directory.clone() else {
            return Ok(());
        };

        let mut images = ImageList::scan(&directory)?;
        let previous_path = self.current_path().map(Path::to_path_buf);
        let current = match previous_path {
            Some(path) if images.position(&path).is_some() => images.position(&path),
            Some(path) if path.is_file() => Some(images.push(path)),
            _ => clamp_index(self.current, images.len()),
        };
        self.install(images, Some(directory), current);
        Ok(())
    }

    fn install(&mut self, images: ImageList, directory: Option<PathBuf>, current: Option<usize>) {
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            count = images.len(),
            directory = ?directory,
            "catalog rebuilt"
        );
        self.images = images;
        self.directory = directory;
        self.current = current;
    }

    /// Returns the current index, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Returns the path of the current image, if any.
    pub fn current_path(&self) -> Option<&Path> {
        self.images.get(self.current?)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    /// Directory the catalog was scanned from.
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Tile references for every image of the current catalog generation.
    pub fn tiles(&self) -> impl Iterator<Item = (TileRef, &Path)> {
        let generation = self.generation;
        self.images
            .iter()
            .enumerate()
            .map(move |(index, path)| (TileRef { generation, index }, path))
    }

    /// Returns a snapshot of the navigation state for the toolbar.
    pub fn navigation_info(&self) -> NavigationInfo {
        let total_count = self.images.len();
        match self.current {
            Some(index) => NavigationInfo {
                has_next: index + 1 < total_count,
                has_previous: index > 0,
                at_first: index == 0,
                at_last: index + 1 == total_count,
                current_index: Some(index),
                total_count,
            },
            None => NavigationInfo {
                total_count,
                ..NavigationInfo::default()
            },
        }
    }
}

fn clamp_index(index: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(index.unwrap_or(0).min(len - 1))
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
