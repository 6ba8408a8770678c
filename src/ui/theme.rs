// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the page and the gallery viewer.

use crate::ui::design_tokens::palette::{self, WHITE};
use iced::Color;

/// Standard color for error text (broken image placeholder, notices).
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Accent color for headings and highlighted text.
pub fn accent_color() -> Color {
    palette::PRIMARY_500
}

/// Text color for controls drawn over the viewer backdrop.
pub fn overlay_text_color() -> Color {
    WHITE
}

/// Spinner color in the viewer and preview placeholders.
pub fn spinner_color() -> Color {
    palette::PRIMARY_400
}
