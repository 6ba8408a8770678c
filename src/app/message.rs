// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::gallery::ImageRef;
use crate::error::Error;
use crate::media::LoadResult;
use crate::ui::gallery_viewer;
use crate::ui::notifications;
use crate::ui::page;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Viewer(gallery_viewer::Message),
    Notification(notifications::Message),
    /// A background image decode finished.
    ImageLoaded { image: ImageRef, result: LoadResult },
    /// Drives the loading spinner while images are pending.
    SpinnerTick(Instant),
    /// Destination picked in the resume save dialog (`None` if cancelled).
    ResumeDestination(Option<PathBuf>),
    /// Result of copying the resume to its destination.
    ResumeSaved(Result<PathBuf, Arc<Error>>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional portfolio file replacing the built-in content.
    pub content: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_LENS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
