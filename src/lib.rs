// SPDX-License-Identifier: MPL-2.0
//! `iced_slides` is a photo viewer built with the Iced GUI framework.
//!
//! It browses the images of a directory either one at a time or as an
//! animated carousel, with a toolbar and a thumbnail strip that appear when
//! the pointer approaches the window edges.

#![doc(html_root_url = "https://docs.rs/iced_slides/0.2.0")]

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod image_navigation;
pub mod ui;
