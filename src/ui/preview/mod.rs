// SPDX-License-Identifier: MPL-2.0
//! Auto-rotating preview carousel shown on each project card.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State};
pub use view::{view, ViewContext};
