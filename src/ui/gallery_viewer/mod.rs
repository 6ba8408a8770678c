// SPDX-License-Identifier: MPL-2.0
//! Modal gallery viewer (lightbox) with zoom, pan and keyboard navigation.

pub mod component;
pub mod session;
pub mod view;

pub use component::{Effect, Message, State};
pub use session::Session;
pub use view::{view, ViewContext};
