// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Gallery viewer scale bounds and step sizes
//! - **Preview**: Auto-rotation interval of project preview carousels
//! - **Smoothing**: Easing of the rendered viewer transform

use crate::domain::ui::newtypes::{preview_bounds, scale_bounds};

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Scale applied when a gallery image is first shown (1.0 = fitted size).
pub const DEFAULT_SCALE: f32 = scale_bounds::DEFAULT;

/// Minimum allowed viewer scale.
pub const MIN_SCALE: f32 = scale_bounds::MIN;

/// Maximum allowed viewer scale.
pub const MAX_SCALE: f32 = scale_bounds::MAX;

/// Scale change per discrete mouse wheel tick.
pub const WHEEL_ZOOM_STEP: f32 = 0.1;

/// Scale change per zoom-in / zoom-out button press.
pub const BUTTON_ZOOM_STEP: f32 = 0.2;

/// Pixel scroll distance treated as one wheel tick.
pub const PIXELS_PER_WHEEL_TICK: f32 = 120.0;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default delay between two preview carousel advances (in milliseconds).
pub const DEFAULT_PREVIEW_INTERVAL_MS: u64 = preview_bounds::DEFAULT_MS;

/// Minimum preview interval (in milliseconds).
pub const MIN_PREVIEW_INTERVAL_MS: u64 = preview_bounds::MIN_MS;

/// Maximum preview interval (in milliseconds).
pub const MAX_PREVIEW_INTERVAL_MS: u64 = preview_bounds::MAX_MS;

// ==========================================================================
// Viewer Behavior Defaults
// ==========================================================================

/// Whether a press on the dimmed backdrop closes the gallery viewer.
pub const DEFAULT_CLOSE_ON_BACKDROP: bool = true;

/// Whether the preview of the project being viewed stops rotating.
pub const DEFAULT_PAUSE_PREVIEW_WHILE_OPEN: bool = false;

// ==========================================================================
// Smoothing Defaults
// ==========================================================================

/// Time constant of the rendered transform easing (in milliseconds).
pub const TRANSFORM_EASING_MS: u64 = 100;

/// Frame interval used while the rendered transform is easing (in milliseconds).
pub const ANIMATION_FRAME_MS: u64 = 16;

/// Image decode results kept in memory.
pub const IMAGE_CACHE_CAPACITY: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SCALE > 0.0);
    assert!(MIN_SCALE < DEFAULT_SCALE);
    assert!(MAX_SCALE > DEFAULT_SCALE);
    assert!(WHEEL_ZOOM_STEP > 0.0);
    assert!(BUTTON_ZOOM_STEP > 0.0);
    assert!(PIXELS_PER_WHEEL_TICK > 0.0);

    assert!(MIN_PREVIEW_INTERVAL_MS > 0);
    assert!(MAX_PREVIEW_INTERVAL_MS >= MIN_PREVIEW_INTERVAL_MS);
    assert!(DEFAULT_PREVIEW_INTERVAL_MS >= MIN_PREVIEW_INTERVAL_MS);
    assert!(DEFAULT_PREVIEW_INTERVAL_MS <= MAX_PREVIEW_INTERVAL_MS);

    assert!(ANIMATION_FRAME_MS > 0);
    assert!(TRANSFORM_EASING_MS >= ANIMATION_FRAME_MS);
    assert!(IMAGE_CACHE_CAPACITY > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_defaults_are_valid() {
        assert_eq!(DEFAULT_SCALE, 1.0);
        assert!(MIN_SCALE < DEFAULT_SCALE);
        assert!(MAX_SCALE > DEFAULT_SCALE);
    }

    #[test]
    fn zoom_steps_match_viewer_controls() {
        assert_eq!(WHEEL_ZOOM_STEP, 0.1);
        assert_eq!(BUTTON_ZOOM_STEP, 0.2);
    }

    #[test]
    fn preview_interval_defaults_are_valid() {
        assert_eq!(DEFAULT_PREVIEW_INTERVAL_MS, 3000);
        assert!(DEFAULT_PREVIEW_INTERVAL_MS >= MIN_PREVIEW_INTERVAL_MS);
        assert!(DEFAULT_PREVIEW_INTERVAL_MS <= MAX_PREVIEW_INTERVAL_MS);
    }
}
