// SPDX-License-Identifier: MPL-2.0
//! `folio_lens` is a personal portfolio viewer built with the Iced GUI framework.
//!
//! Each project card carries an auto-rotating preview carousel; pressing it
//! opens a modal gallery viewer with zoom, drag-to-pan and keyboard
//! navigation. While the viewer is open the page behind it stops scrolling,
//! and both that lock and the keyboard listener are released on every way
//! out of the viewer.

pub mod app;
pub mod config;
pub mod content;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
