// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod scroll_lock;
pub mod transformed_image;

pub use animated_spinner::AnimatedSpinner;
pub use scroll_lock::scroll_lock;
pub use transformed_image::{ImageEvent, TransformedImage};
