// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Handlers borrow the pieces of application state they need through
//! [`UpdateContext`] and return the follow-up [`Task`].

use super::Message;
use crate::config::Config;
use crate::content::{Content, ContentRoot};
use crate::domain::gallery::ImageRef;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageCache, LoadResult};
use crate::ui::gallery_viewer::{self, Effect as ViewerEffect};
use crate::ui::notifications::{self, Notification};
use crate::ui::page::{self, PageMetrics};
use crate::ui::preview::{self, Effect as PreviewEffect};
use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;

/// Spinner rotation added per tick, in radians.
const ROTATION_SPEED: f32 = 0.15;

pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub content: &'a Content,
    pub previews: &'a mut [preview::State],
    pub viewer: &'a mut gallery_viewer::State,
    /// Project card whose gallery the viewer is showing.
    pub viewer_card: &'a mut Option<usize>,
    pub images: &'a mut ImageCache,
    pub page_metrics: &'a mut Option<PageMetrics>,
    pub notifications: &'a mut notifications::Manager,
    pub spinner_rotation: &'a mut f32,
}

/// Images that should be decoded now: what is on screen plus the next
/// image each visible sequence will show.
pub fn wanted_images(
    previews: &[preview::State],
    viewer: &gallery_viewer::State,
) -> Vec<ImageRef> {
    let mut wanted = Vec::new();

    if let Some(session) = viewer.session() {
        let images = &session.gallery().images;
        let current = session.current_index();
        wanted.extend(images.get(current).cloned());
        wanted.extend(images.get(current + 1).cloned());
        if let Some(previous) = current.checked_sub(1) {
            wanted.extend(images.get(previous).cloned());
        }
    }

    for preview in previews {
        let images = preview.images();
        if images.is_empty() {
            continue;
        }
        let current = preview.current_index();
        wanted.push(images[current].clone());
        if preview.is_rotating() {
            wanted.push(images[(current + 1) % images.len()].clone());
        }
    }

    wanted
}

/// Starts background loads for every wanted image not yet in the cache.
pub fn request_images(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let wanted = wanted_images(&*ctx.previews, &*ctx.viewer);
    let missing = ctx.images.request(&wanted);
    if missing.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = missing.len(), "loading images");
    let root = ctx.content.root.clone();
    Task::batch(missing.into_iter().map(move |image| {
        Task::perform(media::load_image_ref(root.clone(), image), |(image, result)| {
            Message::ImageLoaded { image, result }
        })
    }))
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::NavigateTo(section) => {
            if ctx.viewer.is_open() {
                return Task::none();
            }
            page::scroll_to(section, &ctx.content.portfolio, *ctx.page_metrics)
        }
        page::Message::DownloadResume => handle_download_resume(ctx),
        page::Message::Scrolled(metrics) => {
            *ctx.page_metrics = Some(metrics);
            Task::none()
        }
        page::Message::Preview { card, message } => {
            let Some(preview) = ctx.previews.get_mut(card) else {
                return Task::none();
            };
            match preview.handle(message) {
                PreviewEffect::None => Task::none(),
                PreviewEffect::Advanced(_) => request_images(ctx),
                PreviewEffect::OpenGallery { index } => open_gallery(ctx, card, index),
            }
        }
    }
}

/// Opens the viewer on project `card`, starting at `index`.
pub fn open_gallery(ctx: &mut UpdateContext<'_>, card: usize, index: usize) -> Task<Message> {
    let Some(gallery) = ctx
        .content
        .portfolio
        .projects
        .get(card)
        .and_then(|project| project.gallery())
    else {
        return Task::none();
    };

    match ctx.viewer.open(gallery, index) {
        ViewerEffect::Opened => {
            // A replaced session hands the pause over to the new card
            if let Some(previous) = ctx.viewer_card.replace(card) {
                if let Some(preview) = ctx.previews.get_mut(previous) {
                    preview.set_paused(false);
                }
            }
            if ctx.config.gallery.pause_preview_while_open() {
                if let Some(preview) = ctx.previews.get_mut(card) {
                    preview.set_paused(true);
                }
            }
            request_images(ctx)
        }
        _ => Task::none(),
    }
}

pub fn handle_viewer_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_viewer::Message,
) -> Task<Message> {
    let effect = ctx.viewer.handle(message);
    apply_viewer_effect(ctx, effect)
}

fn apply_viewer_effect(ctx: &mut UpdateContext<'_>, effect: ViewerEffect) -> Task<Message> {
    match effect {
        ViewerEffect::None | ViewerEffect::Opened => Task::none(),
        ViewerEffect::IndexChanged(index) => {
            // The card preview follows the last viewed image
            if let Some(preview) = (*ctx.viewer_card).and_then(|card| ctx.previews.get_mut(card)) {
                preview.show(index);
            }
            request_images(ctx)
        }
        ViewerEffect::Closed { last_index } => {
            if let Some(preview) = ctx
                .viewer_card
                .take()
                .and_then(|card| ctx.previews.get_mut(card))
            {
                preview.show(last_index);
                preview.set_paused(false);
            }
            Task::none()
        }
    }
}

pub fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    image: ImageRef,
    result: LoadResult,
) -> Task<Message> {
    ctx.images.finish(image, result);
    Task::none()
}

pub fn handle_spinner_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.spinner_rotation = (*ctx.spinner_rotation + ROTATION_SPEED) % std::f32::consts::TAU;
    Task::none()
}

fn handle_download_resume(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(resume) = ctx.content.portfolio.profile.resume.as_deref() else {
        return Task::none();
    };

    let title = ctx.i18n.tr("resume-dialog-title");
    let file_name = ContentRoot::file_name(resume);

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(&title)
                .set_file_name(&file_name)
                .add_filter("PDF", &["pdf"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::ResumeDestination,
    )
}

/// Copies the resume to the destination picked in the save dialog.
pub fn handle_resume_destination(
    ctx: &mut UpdateContext<'_>,
    destination: Option<PathBuf>,
) -> Task<Message> {
    let Some(destination) = destination else {
        tracing::debug!("resume download cancelled");
        return Task::none();
    };
    let Some(resume) = ctx.content.portfolio.profile.resume.clone() else {
        return Task::none();
    };
    let root = ctx.content.root.clone();

    Task::perform(
        async move { copy_resume(root, resume, destination).await.map_err(Arc::new) },
        Message::ResumeSaved,
    )
}

async fn copy_resume(
    root: ContentRoot,
    resume: String,
    destination: PathBuf,
) -> crate::error::Result<PathBuf> {
    let bytes = root.read_async(&resume).await?;
    tokio::fs::write(&destination, bytes).await?;
    Ok(destination)
}

pub fn handle_resume_saved(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf, Arc<Error>>,
) -> Task<Message> {
    match result {
        Ok(path) => {
            tracing::info!(path = %path.display(), "resume saved");
            ctx.notifications.push(
                Notification::success("resume-saved").with_arg("path", path.display().to_string()),
            );
        }
        Err(error) => {
            tracing::warn!(%error, "failed to save resume");
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::Message,
) -> Task<Message> {
    ctx.notifications.handle(message);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn resume_is_copied_from_content_directory() {
        let source = tempdir().expect("source dir");
        let target = tempdir().expect("target dir");
        std::fs::write(source.path().join("cv.pdf"), b"%PDF-1.7").expect("write resume");
        let destination = target.path().join("saved.pdf");

        let saved = copy_resume(
            ContentRoot::Directory(source.path().to_path_buf()),
            "cv.pdf".to_string(),
            destination.clone(),
        )
        .await
        .expect("resume copies");

        assert_eq!(saved, destination);
        assert_eq!(std::fs::read(&destination).expect("read copy"), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn missing_resume_reports_io_error() {
        let target = tempdir().expect("target dir");
        let result = copy_resume(
            ContentRoot::Builtin,
            "absent.pdf".to_string(),
            target.path().join("saved.pdf"),
        )
        .await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
