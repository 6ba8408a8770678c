// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `State`, a `Message` and an `Effect` telling its owner what
//! happened.
//!
//! # Components
//!
//! - [`page`] - Navigation bar and portfolio sections
//! - [`preview`] - Auto-rotating preview carousel on each project card
//! - [`gallery_viewer`] - Modal lightbox with zoom, pan and navigation
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Zoom, drag, transform easing and page-wide effect guards
//! - [`widgets`] - Custom Iced widgets (spinner, transformed image, scroll lock)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_viewer;
pub mod notifications;
pub mod page;
pub mod preview;
pub mod state;
pub mod styles;
pub mod theme;
pub mod theming;
pub mod widgets;
