// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Reusable state pieces behind the gallery viewer, kept apart from the
//! components so they can be tested without a runtime.

pub mod drag;
pub mod page_effects;
pub mod transform;
pub mod zoom;

pub use drag::DragState;
pub use page_effects::{ListenerHandle, PageEffects, ScrollLock};
pub use transform::{TransformSmoothing, ViewTransform};
pub use zoom::ZoomState;
