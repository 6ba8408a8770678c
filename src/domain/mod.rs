// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value objects with no external dependencies.
//!
//! # Modules
//!
//! - [`gallery`]: Gallery types ([`ImageRef`](gallery::ImageRef),
//!   [`ImageSet`](gallery::ImageSet), [`Gallery`](gallery::Gallery))
//! - [`ui`]: UI value objects ([`ZoomScale`](ui::ZoomScale),
//!   [`PreviewInterval`](ui::PreviewInterval))

pub mod gallery;
pub mod ui;
