// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and sorting image files.
//!
//! This module scans a single directory (non-recursively) for supported image
//! formats and keeps them as a deduplicated, lexicographically sorted list.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// File extensions recognised as images (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "ico", "gif"];

/// Ordered, duplicate-free list of image paths found in a directory.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageList {
    images: Vec<PathBuf>,
}

impl ImageList {
    /// Creates a new empty ImageList.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Scans a directory for supported images and sorts them.
    ///
    /// Returns [`Error::DirectoryNotFound`] when `directory` is not an
    /// existing directory. An existing directory without images yields an
    /// empty list.
    pub fn scan(directory: &Path) -> Result<Self> {
        if !directory.is_dir() {
            return Err(Error::DirectoryNotFound(directory.to_path_buf()));
        }

        let mut images = Vec::new();
        for entry in std::fs::read_dir(directory)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_supported_image(&path) {
                images.push(path);
            }
        }

        Ok(Self::from_paths(images))
    }

    /// Builds a list from arbitrary paths, sorting and removing duplicates.
    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut images: Vec<PathBuf> = paths.into_iter().collect();
        images.sort();
        images.dedup();
        Self { images }
    }

    /// Appends a path that is not part of the list yet and returns its index.
    ///
    /// When the path is already present its existing index is returned and
    /// the list is left untouched.
    pub fn push(&mut self, path: PathBuf) -> usize {
        if let Some(index) = self.position(&path) {
            return index;
        }
        self.images.push(path);
        self.images.len() - 1
    }

    /// Returns the total number of images in the list.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Checks if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Returns the path at the specified index.
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.images.get(index).map(PathBuf::as_path)
    }

    /// Returns the index of `path` in the list.
    pub fn position(&self, path: &Path) -> Option<usize> {
        self.images.iter().position(|p| p == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.images.iter().map(PathBuf::as_path)
    }
}

/// Checks if a file has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| supported.eq_ignore_ascii_case(ext))
        })
}
