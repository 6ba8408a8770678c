// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Scale Bounds
// =============================================================================

/// Gallery viewer scale bounds (0.5x to 3.0x).
pub mod scale_bounds {
    /// Minimum scale factor.
    pub const MIN: f32 = 0.5;
    /// Maximum scale factor.
    pub const MAX: f32 = 3.0;
    /// Identity scale.
    pub const DEFAULT: f32 = 1.0;
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Viewer scale factor, guaranteed to be within `0.5..=3.0`.
///
/// Values are kept at hundredth precision so that repeated `0.1`/`0.2`
/// steps land exactly on the values users see in the readout.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_nan() {
            return Self::default();
        }
        let quantized = (scale * 100.0).round() / 100.0;
        Self(quantized.clamp(scale_bounds::MIN, scale_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Readout percentage, `round(scale * 100)`.
    #[must_use]
    pub fn percent(self) -> u32 {
        // Clamped to [50, 300] so the cast cannot truncate
        (self.0 * 100.0).round() as u32
    }

    /// Whether the image is magnified enough to be dragged around.
    #[must_use]
    pub fn is_pannable(self) -> bool {
        self.0 > scale_bounds::DEFAULT
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        (self.0 - scale_bounds::DEFAULT).abs() < f32::EPSILON
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX
    }

    #[must_use]
    pub fn zoom_in(self, step: f32) -> Self {
        Self::new(self.0 + step)
    }

    #[must_use]
    pub fn zoom_out(self, step: f32) -> Self {
        Self::new(self.0 - step)
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT)
    }
}

// =============================================================================
// PreviewInterval
// =============================================================================

/// Preview rotation interval bounds in milliseconds.
pub mod preview_bounds {
    /// Minimum interval.
    pub const MIN_MS: u64 = 500;
    /// Maximum interval.
    pub const MAX_MS: u64 = 60_000;
    /// Default interval.
    pub const DEFAULT_MS: u64 = 3000;
}

/// Delay between two preview carousel advances, clamped to 0.5s–60s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewInterval(u64);

impl PreviewInterval {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(preview_bounds::MIN_MS, preview_bounds::MAX_MS))
    }

    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for PreviewInterval {
    fn default() -> Self {
        Self(preview_bounds::DEFAULT_MS)
    }
}
